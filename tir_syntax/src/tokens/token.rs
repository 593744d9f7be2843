// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::tokens::{TokenKind, Trivia};
use std::fmt::{Display, Formatter};

/// A source-code token together with the trivia that surrounds it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) leading_trivia: Trivia,
    pub(crate) trailing_trivia: Trivia,
    pub(crate) text: String,
}

impl Token {
    pub fn simple(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
            leading_trivia: Trivia::default(),
            trailing_trivia: Trivia::default(),
        }
    }

    /// Creates a punctuation token using its canonical text.
    /// Identifiers have no canonical text and get an empty one.
    pub fn punct(kind: TokenKind) -> Token {
        Token::simple(kind, kind.canonical_text().unwrap_or_default())
    }

    pub fn identifier(text: impl Into<String>) -> Token {
        Token::simple(TokenKind::Identifier, text)
    }

    pub fn with_leading_trivia(mut self, trivia: Trivia) -> Token {
        self.leading_trivia = trivia;
        self
    }

    pub fn with_trailing_trivia(mut self, trivia: Trivia) -> Token {
        self.trailing_trivia = trivia;
        self
    }

    /// Returns a copy of this token with different text, but the same kind and trivia.
    pub fn with_text(&self, text: impl Into<String>) -> Token {
        Token {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The length of the main content of this token in bytes without any trivia
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// The length of this token including trivia
    pub fn byte_len(&self) -> usize {
        self.leading_trivia.byte_len() + self.text_len() + self.trailing_trivia.byte_len()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for trivia in &self.leading_trivia {
            write!(f, "{trivia}")?;
        }
        write!(f, "{}", self.text)?;
        for trivia in &self.trailing_trivia {
            write!(f, "{trivia}")?;
        }
        Ok(())
    }
}

/// This macro can be used to easily generate a token from it's literal form:
/// ```
/// use tir_syntax::tok;
/// use tir_syntax::tokens::{Token, TokenKind};
///
/// assert_eq!(tok![<], Token::simple(TokenKind::LT, "<"));
/// assert_eq!(tok!["%this"], Token::simple(TokenKind::Identifier, "%this"));
/// ```
///
/// Identifiers that are not valid rust identifiers (such as `%this` or `java.lang.String`)
/// can be written as string literals.
/// See also [tir!](crate::tir) to generate a vector of tokens from their literal form.
#[macro_export]
macro_rules! tok {
    (.) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::Dot)
    };
    (:) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::Colon)
    };
    (;) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::SemiColon)
    };
    (,) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::Comma)
    };
    (<) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::LT)
    };
    (>) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::GT)
    };
    (=) => {
        $crate::tokens::Token::punct($crate::tokens::TokenKind::EQ)
    };
    ($text:literal) => {
        $crate::tokens::Token::identifier($text)
    };
    ($ident:ident) => {
        $crate::tokens::Token::identifier(stringify!($ident))
    };
}

#[macro_export]
macro_rules! tir {
    ($($tokens:tt)+) => {
        vec![$($crate::tok![$tokens],)+]
    };
}

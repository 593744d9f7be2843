// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use std::fmt::{Display, Formatter};

/// The kind of a TIR token.
///
/// Identifiers cover everything that names something in TIR: variables such as `r0` or `%this`,
/// qualified class names such as `java.lang.String` and type names such as `int[]`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum TokenKind {
    Identifier,
    Dot,
    Colon,
    SemiColon,
    Comma,
    LT,
    GT,
    LeftSquare,
    RightSquare,
    EQ,
}

impl TokenKind {
    /// The canonical source text of a punctuation token, or `None` for identifiers.
    pub fn canonical_text(&self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Identifier => return None,
            Dot => ".",
            Colon => ":",
            SemiColon => ";",
            Comma => ",",
            LT => "<",
            GT => ">",
            LeftSquare => "[",
            RightSquare => "]",
            EQ => "=",
        })
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.canonical_text() {
            Some(text) => write!(f, "'{text}'"),
            None => write!(f, "identifier"),
        }
    }
}

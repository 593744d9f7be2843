// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use std::fmt::{Display, Formatter};

/// Single trivia pieces that can be combined to form [Trivia](crate::tokens::Trivia).
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TriviaPiece {
    /// Space ' ' characters
    Spaces(usize),
    /// Horizontal tabs '\t' characters
    HorizontalTabs(usize),
    /// newline '\n' characters
    LineFeeds(usize),
    /// Carriage return ('\r') + newline ('\n') feeds
    CarriageReturnLineFeeds(usize),
    /// A line comment starting with '//', without the line break
    LineComment(String),
    /// A block comment starting with a '/*' and ending with a '*/'
    BlockComment(String),
}

impl Display for TriviaPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn fmt_repeated(f: &mut Formatter<'_>, el: impl Display, count: usize) -> std::fmt::Result {
            for _ in 0..count {
                write!(f, "{el}")?
            }
            Ok(())
        }
        use TriviaPiece::*;
        match self {
            Spaces(n) => fmt_repeated(f, ' ', *n),
            HorizontalTabs(n) => fmt_repeated(f, '\t', *n),
            LineFeeds(n) => fmt_repeated(f, '\n', *n),
            CarriageReturnLineFeeds(n) => fmt_repeated(f, "\r\n", *n),
            LineComment(str) => write!(f, "//{str}"),
            BlockComment(str) => write!(f, "/*{str}*/"),
        }
    }
}

impl TriviaPiece {
    /// Returns the length of this trivia piece.
    pub fn byte_len(&self) -> usize {
        use TriviaPiece::*;
        match self {
            Spaces(n) | HorizontalTabs(n) | LineFeeds(n) => *n,
            CarriageReturnLineFeeds(n) => *n * 2,
            LineComment(str) => 2 + str.len(),
            BlockComment(str) => 4 + str.len(),
        }
    }
}

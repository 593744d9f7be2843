// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::tokens::TriviaPiece;
use std::slice;

/// Trivia elements that are attached to tokens but carry no syntactic meaning,
/// i.e. whitespace and comments.
#[derive(Eq, PartialEq, Debug, Default, Clone)]
pub struct Trivia {
    pub pieces: Vec<TriviaPiece>,
}

impl Trivia {
    pub fn new(pieces: impl Into<Vec<TriviaPiece>>) -> Trivia {
        Trivia {
            pieces: pieces.into(),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.pieces.iter().map(TriviaPiece::byte_len).sum()
    }

}

impl<'a> IntoIterator for &'a Trivia {
    type Item = &'a TriviaPiece;
    type IntoIter = slice::Iter<'a, TriviaPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

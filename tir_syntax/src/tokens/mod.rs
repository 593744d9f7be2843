//! Tokens and trivia that make up the leaves of a TIR syntax tree.
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

#[macro_use]
pub mod token;
pub mod token_kind;
pub mod trivia;
pub mod trivia_piece;

pub use token::Token;
pub use token_kind::TokenKind;
pub use trivia::Trivia;
pub use trivia_piece::TriviaPiece;

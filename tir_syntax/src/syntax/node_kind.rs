// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use std::fmt::{Display, Formatter};

/// The syntactic kind of a [SyntaxNode](crate::syntax::node::SyntaxNode).
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum NodeKind {
    File,
    AssignStatement,
    /// An assignable expression: `r0`, `r0.<A: int f>`, `<A: int f>` or `r1[i2]`
    Lvalue,
    /// A field signature: `<A: int f>`
    FieldSig,
    IdentifierVariable,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

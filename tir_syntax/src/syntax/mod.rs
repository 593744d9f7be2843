//! Typed and untyped syntax nodes, and methods to build, traverse and rewrite them.
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com
pub mod builder;
pub mod child;
pub mod element;
pub mod field_sig;
pub(crate) mod green;
pub mod identifier_variable;
pub mod lvalue;
pub mod named;
pub mod node;
pub mod node_kind;
pub mod rewrite;
#[cfg(test)]
pub(crate) mod test_util;
pub mod visitor;

use crate::syntax::node::SyntaxNode;
use crate::syntax::node_kind::NodeKind;
use crate::syntax::visitor::Preorder;
use std::fmt::{Display, Formatter};

pub trait AstNode
where
    Self: Sized,
{
    /// Cast an abstract SyntaxNode into the AstNode described by `Self`
    fn cast(node: SyntaxNode) -> Option<Self>;

    /// Return the underlying Syntax Node
    fn raw(&self) -> SyntaxNode;

    /// Walk the tree according to the textual order.
    fn walk(&self) -> Preorder {
        Preorder::new(self.raw())
    }
}

/// Error returned when converting a [SyntaxNode] into a typed node of a different kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMismatch {
    pub expected: NodeKind,
    pub found: NodeKind,
}

impl KindMismatch {
    pub(crate) fn check(expected: NodeKind, node: &SyntaxNode) -> Result<(), KindMismatch> {
        if node.kind() == expected {
            Ok(())
        } else {
            Err(KindMismatch {
                expected,
                found: node.kind(),
            })
        }
    }
}

impl Display for KindMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expected {} node, found {}", self.expected, self.found)
    }
}

impl std::error::Error for KindMismatch {}

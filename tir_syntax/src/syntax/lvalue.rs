// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::field_sig::FieldSig;
use crate::syntax::identifier_variable::IdentifierVariable;
use crate::syntax::node::SyntaxNode;
use crate::syntax::node_kind::NodeKind;
use crate::syntax::visitor::{TirVisitor, Visitable};
use crate::syntax::{AstNode, KindMismatch};
use std::fmt::{Display, Formatter};

/// An assignable expression, i.e. the left-hand side of an assignment.
///
/// Depending on the form, an lvalue has
/// * a single variable: `r0`
/// * a variable and a field signature: `r0.<A: int f>`
/// * only a field signature (static fields): `<A: int f>`
/// * two variables (array access): `r1[i2]`
///
/// Children are looked up on every call and are never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lvalue(pub(crate) SyntaxNode);

impl AstNode for Lvalue {
    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            NodeKind::Lvalue => Some(Lvalue(node)),
            _ => None,
        }
    }

    fn raw(&self) -> SyntaxNode {
        self.0.clone()
    }
}

impl TryFrom<SyntaxNode> for Lvalue {
    type Error = KindMismatch;

    fn try_from(node: SyntaxNode) -> Result<Self, Self::Error> {
        KindMismatch::check(NodeKind::Lvalue, &node)?;
        Ok(Lvalue(node))
    }
}

impl Display for Lvalue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Lvalue {
    /// The field signature, if this lvalue is a field access.
    pub fn field_sig(&self) -> Option<FieldSig> {
        self.0.children().find_map(FieldSig::cast)
    }

    /// All variables of this lvalue in source order. Empty for static field accesses.
    pub fn identifier_variables(&self) -> Vec<IdentifierVariable> {
        self.0
            .children()
            .filter_map(IdentifierVariable::cast)
            .collect()
    }

    pub fn is_field_access(&self) -> bool {
        self.field_sig().is_some()
    }
}

impl Visitable for Lvalue {
    fn accept(&self, visitor: &mut dyn TirVisitor) {
        visitor.visit_lvalue(self)
    }
}

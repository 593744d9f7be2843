// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::field_sig::FieldSig;
use crate::syntax::identifier_variable::IdentifierVariable;
use crate::syntax::lvalue::Lvalue;
use crate::syntax::node::SyntaxNode;
use crate::syntax::node_kind::NodeKind;
use crate::syntax::visitor::{TirVisitor, Visitable};
use crate::syntax::AstNode;

/// Any node that has a typed representation.
///
/// Nodes of other kinds (such as [NodeKind::File]) are only reachable
/// through the generic [SyntaxNode] API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TirElement {
    Lvalue(Lvalue),
    FieldSig(FieldSig),
    IdentifierVariable(IdentifierVariable),
}

impl AstNode for TirElement {
    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            NodeKind::Lvalue => Some(TirElement::Lvalue(Lvalue(node))),
            NodeKind::FieldSig => Some(TirElement::FieldSig(FieldSig(node))),
            NodeKind::IdentifierVariable => {
                Some(TirElement::IdentifierVariable(IdentifierVariable(node)))
            }
            NodeKind::File | NodeKind::AssignStatement => None,
        }
    }

    fn raw(&self) -> SyntaxNode {
        match self {
            TirElement::Lvalue(node) => node.raw(),
            TirElement::FieldSig(node) => node.raw(),
            TirElement::IdentifierVariable(node) => node.raw(),
        }
    }
}

impl Visitable for TirElement {
    fn accept(&self, visitor: &mut dyn TirVisitor) {
        match self {
            TirElement::Lvalue(node) => node.accept(visitor),
            TirElement::FieldSig(node) => node.accept(visitor),
            TirElement::IdentifierVariable(node) => node.accept(visitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TirElement;
    use crate::syntax::node_kind::NodeKind;
    use crate::syntax::test_util::{assignment_file, instance_field};
    use crate::syntax::AstNode;
    use assert_matches::assert_matches;

    #[test]
    fn cast_by_kind() {
        let lvalue = instance_field();
        assert_matches!(TirElement::cast(lvalue.raw()), Some(TirElement::Lvalue(_)));
        let children: Vec<_> = lvalue
            .raw()
            .children()
            .filter_map(TirElement::cast)
            .collect();
        assert_matches!(
            children.as_slice(),
            [TirElement::IdentifierVariable(_), TirElement::FieldSig(_)]
        );
        assert_eq!(children[1].raw().kind(), NodeKind::FieldSig);
    }

    #[test]
    fn untyped_kinds() {
        let file = assignment_file();
        assert_matches!(TirElement::cast(file.clone()), None);
        assert_matches!(TirElement::cast(file.first_child().unwrap()), None);
    }
}

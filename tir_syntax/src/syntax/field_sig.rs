// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::named::NamedElement;
use crate::syntax::node::{SyntaxNode, SyntaxToken};
use crate::syntax::node_kind::NodeKind;
use crate::syntax::visitor::{TirVisitor, Visitable};
use crate::syntax::{AstNode, KindMismatch};
use crate::tokens::TokenKind;
use std::fmt::{Display, Formatter};

/// The signature of a field, `<DeclaringClass: type name>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSig(pub(crate) SyntaxNode);

impl AstNode for FieldSig {
    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            NodeKind::FieldSig => Some(FieldSig(node)),
            _ => None,
        }
    }

    fn raw(&self) -> SyntaxNode {
        self.0.clone()
    }
}

impl TryFrom<SyntaxNode> for FieldSig {
    type Error = KindMismatch;

    fn try_from(node: SyntaxNode) -> Result<Self, Self::Error> {
        KindMismatch::check(NodeKind::FieldSig, &node)?;
        Ok(FieldSig(node))
    }
}

impl Display for FieldSig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldSig {
    fn identifier(&self, n: usize) -> Option<SyntaxToken> {
        self.0
            .tokens()
            .filter(|tok| tok.kind() == TokenKind::Identifier)
            .nth(n)
    }

    /// The class that declares the field
    pub fn class_name(&self) -> Option<SyntaxToken> {
        self.identifier(0)
    }

    pub fn field_type(&self) -> Option<SyntaxToken> {
        self.identifier(1)
    }

    pub fn field_name(&self) -> Option<SyntaxToken> {
        self.identifier(2)
    }
}

impl NamedElement for FieldSig {
    fn name_token(&self) -> Option<SyntaxToken> {
        self.field_name()
    }
}

impl Visitable for FieldSig {
    fn accept(&self, visitor: &mut dyn TirVisitor) {
        visitor.visit_field_sig(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldSig;
    use crate::syntax::builder::NodeBuilder;
    use crate::syntax::node_kind::NodeKind;
    use crate::syntax::test_util::{instance_field, push_field_sig};
    use crate::syntax::AstNode;
    use crate::tokens::Token;
    use pretty_assertions::assert_eq;

    #[test]
    fn parts_of_the_signature() {
        let field_sig = instance_field().field_sig().unwrap();
        assert_eq!(field_sig.class_name().unwrap().text(), "A");
        assert_eq!(field_sig.field_type().unwrap().text(), "int");
        let name = field_sig.field_name().unwrap();
        assert_eq!(name.text(), "f");
        assert_eq!(name.text_pos(), 11);
    }

    #[test]
    fn qualified_names() {
        let mut builder = NodeBuilder::new();
        builder.start_node(NodeKind::Lvalue);
        push_field_sig(&mut builder, "java.lang.String", "char[]", "value");
        let node = builder.finish();
        let field_sig = FieldSig::cast(node.first_child().unwrap()).unwrap();
        assert_eq!(field_sig.to_string(), "<java.lang.String: char[] value>");
        assert_eq!(field_sig.class_name().unwrap().text(), "java.lang.String");
        assert_eq!(field_sig.field_type().unwrap().text(), "char[]");
    }

    #[test]
    fn incomplete_signature() {
        let mut builder = NodeBuilder::new();
        builder.start_node(NodeKind::FieldSig);
        builder.push(Token::identifier("A"));
        let field_sig = FieldSig::cast(builder.finish()).unwrap();
        assert_eq!(field_sig.class_name().unwrap().text(), "A");
        assert_eq!(field_sig.field_type(), None);
        assert_eq!(field_sig.field_name(), None);
    }
}

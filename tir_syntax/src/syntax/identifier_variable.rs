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

/// A reference to a local variable such as `r0`, `i2` or `%this`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierVariable(pub(crate) SyntaxNode);

impl AstNode for IdentifierVariable {
    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            NodeKind::IdentifierVariable => Some(IdentifierVariable(node)),
            _ => None,
        }
    }

    fn raw(&self) -> SyntaxNode {
        self.0.clone()
    }
}

impl TryFrom<SyntaxNode> for IdentifierVariable {
    type Error = KindMismatch;

    fn try_from(node: SyntaxNode) -> Result<Self, Self::Error> {
        KindMismatch::check(NodeKind::IdentifierVariable, &node)?;
        Ok(IdentifierVariable(node))
    }
}

impl Display for IdentifierVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IdentifierVariable {
    pub fn identifier(&self) -> Option<SyntaxToken> {
        self.0.tokens().find(|tok| tok.kind() == TokenKind::Identifier)
    }
}

impl NamedElement for IdentifierVariable {
    fn name_token(&self) -> Option<SyntaxToken> {
        self.identifier()
    }
}

impl Visitable for IdentifierVariable {
    fn accept(&self, visitor: &mut dyn TirVisitor) {
        visitor.visit_identifier_variable(self)
    }
}

//! Private API for the underlying Green Tree
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com
use crate::syntax::child::Child;
use crate::syntax::node_kind::NodeKind;
use crate::tokens::{Token, TokenKind};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GreenToken(Arc<Token>);

impl GreenToken {
    pub(crate) fn new(token: Token) -> GreenToken {
        GreenToken(Arc::new(token))
    }

    pub fn token(&self) -> &Token {
        &self.0
    }

    pub fn kind(&self) -> TokenKind {
        self.0.kind()
    }

    /// Returns `true` if both tokens share the same allocation.
    pub(crate) fn ptr_eq(&self, other: &GreenToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn text(&self) -> &str {
        self.0.text()
    }

    pub fn byte_len(&self) -> usize {
        self.0.byte_len()
    }
}

impl Display for GreenToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A child together with its byte offset relative to the start of the parent.
pub(crate) type GreenChild = Child<(usize, GreenNode), (usize, GreenToken)>;

impl GreenChild {
    pub fn byte_len(&self) -> usize {
        match self {
            GreenChild::Token((_, token)) => token.byte_len(),
            GreenChild::Node((_, node)) => node.byte_len(),
        }
    }

    fn with_offset(self, offset: usize) -> GreenChild {
        match self {
            GreenChild::Token((_, token)) => GreenChild::Token((offset, token)),
            GreenChild::Node((_, node)) => GreenChild::Node((offset, node)),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GreenNode(Arc<GreenNodeData>);

#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct GreenNodeData {
    kind: NodeKind,
    children: Vec<GreenChild>,
    /// Sum of the byte lengths of all children
    byte_len: usize,
}

impl GreenNodeData {
    pub(crate) fn new(kind: NodeKind) -> GreenNodeData {
        GreenNodeData {
            kind,
            children: vec![],
            byte_len: 0,
        }
    }

    fn push_child(&mut self, child: GreenChild) {
        self.byte_len += child.byte_len();
        self.children.push(child)
    }

    /// Appends a token directly after the last child.
    pub(crate) fn push_token(&mut self, token: Token) {
        let offset = self.byte_len;
        self.push_child(Child::Token((offset, GreenToken::new(token))))
    }

    /// Appends a node directly after the last child.
    pub(crate) fn push_node(&mut self, node: GreenNode) {
        let offset = self.byte_len;
        self.push_child(Child::Node((offset, node)))
    }

    /// Replaces the child at `index`. The offsets of all following children are shifted
    /// so that they stay contiguous.
    pub(crate) fn replace_child(&mut self, index: usize, child: GreenChild) {
        self.children[index] = child;
        let children = std::mem::take(&mut self.children);
        self.byte_len = 0;
        for child in children {
            let offset = self.byte_len;
            self.push_child(child.with_offset(offset));
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

impl GreenNode {
    pub(crate) fn new(data: GreenNodeData) -> GreenNode {
        GreenNode(Arc::new(data))
    }

    pub(crate) fn data(&self) -> &GreenNodeData {
        &self.0
    }

    /// Returns `true` if both nodes share the same allocation.
    pub(crate) fn ptr_eq(&self, other: &GreenNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn children(&self) -> impl Iterator<Item = &GreenChild> {
        self.0.children.iter()
    }

    pub fn kind(&self) -> NodeKind {
        self.0.kind
    }

    pub fn byte_len(&self) -> usize {
        self.0.byte_len()
    }

    #[cfg(test)]
    pub fn test_text(&self, indent: usize) -> String {
        use std::fmt::Write;
        let mut w = String::new();
        writeln!(&mut w, "{:indent$}{:?}", "", self.kind(), indent = indent).unwrap();
        for child in self.children() {
            match child {
                Child::Node((_, subnode)) => w.push_str(&subnode.test_text(indent + 2)),
                Child::Token((_, token)) => {
                    write!(&mut w, "{:indent$}{:?}", "", token.kind(), indent = indent + 2)
                        .unwrap();
                    if token.kind() == TokenKind::Identifier {
                        write!(&mut w, " '{}'", token.text()).unwrap();
                    }
                    writeln!(&mut w).unwrap();
                }
            }
        }
        w
    }
}

impl Display for GreenNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for child in self.children() {
            match child {
                Child::Node((_, node)) => write!(f, "{node}")?,
                Child::Token((_, token)) => write!(f, "{token}")?,
            }
        }
        Ok(())
    }
}

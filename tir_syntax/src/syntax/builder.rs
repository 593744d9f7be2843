// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::green::{GreenNode, GreenNodeData};
use crate::syntax::node::SyntaxNode;
use crate::syntax::node_kind::NodeKind;
use crate::tokens::Token;
use log::trace;

/// Builder used by whoever produces TIR trees (usually a parser) to create nodes.
///
/// Calls to [NodeBuilder::start_node] and [NodeBuilder::end_node] must be balanced.
/// The first started node becomes the root. Closing the root with `end_node` is optional,
/// [NodeBuilder::finish] closes it as well. Nothing may be added once the root is closed.
///
/// # Examples
/// ```
/// use tir_syntax::syntax::builder::NodeBuilder;
/// use tir_syntax::syntax::node_kind::NodeKind;
/// use tir_syntax::tok;
///
/// let mut builder = NodeBuilder::new();
/// builder.start_node(NodeKind::Lvalue);
/// builder.start_node(NodeKind::IdentifierVariable);
/// builder.push(tok![r0]);
/// builder.end_node();
/// let lvalue = builder.finish();
///
/// assert_eq!(lvalue.kind(), NodeKind::Lvalue);
/// assert_eq!(lvalue.to_string(), "r0");
/// ```
pub struct NodeBuilder {
    stack: Vec<GreenNodeData>,
    text_len: usize,
    root_closed: bool,
}

impl Default for NodeBuilder {
    fn default() -> Self {
        NodeBuilder::new()
    }
}

impl NodeBuilder {
    pub fn new() -> NodeBuilder {
        NodeBuilder {
            stack: Vec::default(),
            text_len: 0,
            root_closed: false,
        }
    }

    fn current(&mut self) -> &mut GreenNodeData {
        assert!(!self.root_closed, "Token pushed after the root was closed");
        self.stack
            .last_mut()
            .expect("Token or node pushed outside of any node")
    }

    pub fn push(&mut self, token: Token) {
        self.text_len += token.byte_len();
        self.current().push_token(token);
    }

    pub fn push_all(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            self.push(token)
        }
    }

    pub fn start_node(&mut self, kind: NodeKind) {
        assert!(
            !self.root_closed,
            "Node {kind:?} started after the root was closed"
        );
        trace!("start {kind:?} at {}", self.text_len);
        self.stack.push(GreenNodeData::new(kind));
    }

    /// Closes the innermost open node and appends it to its parent.
    ///
    /// # Panics
    /// If no node is open, or the root has already been closed.
    pub fn end_node(&mut self) {
        assert!(
            !self.root_closed,
            "Unbalanced start_node / end_node: the root is already closed"
        );
        if self.stack.len() == 1 {
            // The root stays on the stack until `finish`
            trace!("end root {:?} at {}", self.stack[0].kind(), self.text_len);
            self.root_closed = true;
            return;
        }
        let node = self
            .stack
            .pop()
            .expect("Unbalanced start_node / end_node: no node is open");
        trace!("end {:?} at {}", node.kind(), self.text_len);
        self.current().push_node(GreenNode::new(node))
    }

    pub fn finish(mut self) -> SyntaxNode {
        let root = self.stack.pop().expect("Unbalanced start_node / end_node");
        assert!(
            self.stack.is_empty(),
            "{} node(s) still open when finishing {:?}",
            self.stack.len(),
            root.kind()
        );
        SyntaxNode::new_root(GreenNode::new(root))
    }

    /// The number of bytes that have been pushed so far.
    pub fn current_pos(&self) -> usize {
        self.text_len
    }
}

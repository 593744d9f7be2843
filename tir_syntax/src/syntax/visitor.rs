//! Traversal of syntax trees.
//!
//! There are two ways to traverse a tree:
//! * [Preorder] is an iterator over [WalkEvent]s in textual order.
//! * Visitors. A [TirVisitor] has one method per typed node kind and is invoked by
//!   [Visitable::accept]. A [SyntaxVisitor] is a generic visitor that does not know about
//!   node kinds; by default it visits all children of a node.
//!
//! Typed and generic visitors can be mixed: a generic visitor that also implements
//! [TirVisitor] exposes this through [SyntaxVisitor::as_tir_visitor], and
//! [Visitable::accept_generic] then dispatches to the typed method instead of
//! the generic traversal.
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::child::Child;
use crate::syntax::element::TirElement;
use crate::syntax::field_sig::FieldSig;
use crate::syntax::identifier_variable::IdentifierVariable;
use crate::syntax::lvalue::Lvalue;
use crate::syntax::node::{SyntaxNode, SyntaxToken};
use crate::syntax::AstNode;
use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent<T> {
    Enter(T),
    Leave(T),
}

/// Iterator that visits nodes in their textual order
pub struct Preorder {
    start: SyntaxNode,
    next: Option<WalkEvent<SyntaxNode>>,
    skip_subtree: bool,
}

impl Preorder {
    pub fn new(start: SyntaxNode) -> Preorder {
        let next = Some(WalkEvent::Enter(start.clone()));
        Preorder {
            start,
            next,
            skip_subtree: false,
        }
    }

    /// Do not descend into the node that was entered last.
    pub fn skip_subtree(&mut self) {
        self.skip_subtree = true
    }

    fn do_skip(&mut self) {
        self.next = self.next.take().and_then(|next| match next {
            WalkEvent::Enter(first_child) => first_child.parent().map(WalkEvent::Leave),
            WalkEvent::Leave(parent) => Some(WalkEvent::Leave(parent)),
        })
    }
}

impl Iterator for Preorder {
    type Item = WalkEvent<SyntaxNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skip_subtree {
            self.do_skip();
            self.skip_subtree = false;
        }
        let next = self.next.take();
        self.next = next.as_ref().and_then(|next| {
            Some(match next {
                WalkEvent::Enter(node) => match node.first_child() {
                    Some(child) => WalkEvent::Enter(child),
                    None => WalkEvent::Leave(node.clone()),
                },
                WalkEvent::Leave(node) => {
                    if node == &self.start {
                        return None;
                    }
                    match node.next_sibling() {
                        Some(sibling) => WalkEvent::Enter(sibling),
                        None => WalkEvent::Leave(node.parent()?),
                    }
                }
            })
        });
        next
    }
}

/// A visitor with one method per typed node kind.
///
/// Visiting a node does not visit its children.
/// To descend, call [Visitable::accept] on the children returned by the node's accessors.
pub trait TirVisitor {
    fn visit_lvalue(&mut self, _lvalue: &Lvalue) {}

    fn visit_field_sig(&mut self, _field_sig: &FieldSig) {}

    fn visit_identifier_variable(&mut self, _variable: &IdentifierVariable) {}
}

/// A visitor that treats all nodes alike.
pub trait SyntaxVisitor {
    /// Visits a node that is not handled by a [TirVisitor].
    /// The default implementation visits all children using [walk].
    fn visit_node(&mut self, node: &SyntaxNode) {
        walk(self, node)
    }

    fn visit_token(&mut self, _token: &SyntaxToken) {}

    /// Returns `Some`, if this visitor is also a [TirVisitor].
    fn as_tir_visitor(&mut self) -> Option<&mut dyn TirVisitor> {
        None
    }
}

/// Visits all direct children of `node` in textual order.
///
/// Nodes are dispatched through [SyntaxNode::accept], tokens are passed to
/// [SyntaxVisitor::visit_token].
pub fn walk<V: SyntaxVisitor + ?Sized>(visitor: &mut V, node: &SyntaxNode) {
    for child in node.children_with_tokens() {
        match child {
            Child::Node(node) => node.accept(visitor),
            Child::Token(token) => visitor.visit_token(&token),
        }
    }
}

/// A typed node that can be visited.
pub trait Visitable: AstNode {
    /// Calls the method of `visitor` that belongs to the kind of this node, exactly once.
    fn accept(&self, visitor: &mut dyn TirVisitor);

    /// Entry point for visitors that are not known to be a [TirVisitor].
    ///
    /// If `visitor` is also a [TirVisitor], this is the same as [Visitable::accept].
    /// Otherwise, this node is handed to [SyntaxVisitor::visit_node].
    fn accept_generic<V: SyntaxVisitor + ?Sized>(&self, visitor: &mut V) {
        match visitor.as_tir_visitor() {
            Some(tir_visitor) => self.accept(tir_visitor),
            None => {
                let node = self.raw();
                trace!("generic traversal of {:?}@{}", node.kind(), node.offset());
                visitor.visit_node(&node)
            }
        }
    }
}

impl SyntaxNode {
    /// Dispatches to the typed node for this node's kind, if there is one,
    /// and to [SyntaxVisitor::visit_node] otherwise.
    pub fn accept<V: SyntaxVisitor + ?Sized>(&self, visitor: &mut V) {
        match TirElement::cast(self.clone()) {
            Some(element) => element.accept_generic(visitor),
            None => visitor.visit_node(self),
        }
    }
}

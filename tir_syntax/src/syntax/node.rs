//! Public API for untyped nodes.
//!
//! Every element of a TIR file is either a [SyntaxToken] or a [SyntaxNode].
//! A SyntaxToken wraps a [Token](crate::tokens::Token) and gives access to the
//! source text and the kind of the token. A SyntaxNode groups tokens and sub-nodes.
//! For the field write `r0.<A: int f>`, the tree looks like this:
//!
//! ```no-check
//!                      Lvalue
//!                        |
//!     -------------------------------------
//!     |                |                  |
//! IdentifierVariable  `.`              FieldSig
//!     |                                   |
//!   `r0`                  ---------------------------------
//!                         |    |    |     |      |        |
//!                        `<`  `A`  `:`  `int`   `f`      `>`
//! ```
//!
//! # Tree traversal
//! Use the methods on `SyntaxNode`, such as [SyntaxNode::children], [SyntaxNode::parent] or
//! [SyntaxNode::root], or walk the tree in textual pre-order with
//! [Preorder](crate::syntax::visitor::Preorder).
//! Kind-specific traversal is done with the visitors in [crate::syntax::visitor].
//!
//! # Ownership
//! The actual data lives in an immutable green tree that is shared between all views.
//! `SyntaxNode`s know their parent, offset and index and are created on the fly while
//! traversing. Typed nodes such as [Lvalue](crate::syntax::lvalue::Lvalue) are in turn
//! thin wrappers around a `SyntaxNode`.
//!
//! # Mutability
//! Once created, a [SyntaxNode] is immutable. To change the tree, use the
//! [Rewriter](crate::syntax::rewrite::Rewriter), which creates a new tree from the
//! old one while replacing selected nodes.
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::child::Child;
use crate::syntax::green::{GreenNode, GreenNodeData, GreenToken};
use crate::syntax::node_kind::NodeKind;
use crate::syntax::rewrite::{RewriteAction, Rewriter};
use crate::tokens::{Token, TokenKind};
use std::fmt::{Display, Formatter};
use std::iter;
use std::sync::Arc;

pub type SyntaxElement = Child<SyntaxNode, SyntaxToken>;

/// A token at a position in the tree.
///
/// Two tokens are equal if they denote the same position of the same tree.
#[derive(Clone, Debug)]
pub struct SyntaxToken(Arc<SyntaxTokenData>);

#[derive(Debug)]
pub struct SyntaxTokenData {
    offset: usize,
    index: usize,
    parent: SyntaxNode,
    green: GreenToken,
}

impl SyntaxToken {
    pub(crate) fn new(
        offset: usize,
        index: usize,
        parent: SyntaxNode,
        green: GreenToken,
    ) -> SyntaxToken {
        SyntaxToken(Arc::new(SyntaxTokenData {
            offset,
            index,
            parent,
            green,
        }))
    }

    pub fn kind(&self) -> TokenKind {
        self.0.green.kind()
    }

    pub fn text(&self) -> &str {
        self.0.green.text()
    }

    /// The byte position of this token, including leading trivia.
    pub fn text_pos(&self) -> usize {
        self.0.offset
    }

    pub fn byte_len(&self) -> usize {
        self.0.green.byte_len()
    }

    pub fn parent(&self) -> SyntaxNode {
        self.0.parent.clone()
    }

    pub(crate) fn green(&self) -> &GreenToken {
        &self.0.green
    }

    /// The position of this token among all children of its parent.
    pub(crate) fn index(&self) -> usize {
        self.0.index
    }
}

impl PartialEq for SyntaxToken {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.index == other.0.index
                && self.0.green.ptr_eq(&other.0.green)
                && self.0.parent == other.0.parent)
    }
}

impl Eq for SyntaxToken {}

impl Display for SyntaxToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.green)
    }
}

/// A node at a position in the tree.
///
/// Equality is identity: two `SyntaxNode`s are equal if they were created for the same
/// position of the same tree, even if they are distinct handles. Trees that were built
/// independently never compare equal, regardless of their text.
#[derive(Clone, Debug)]
pub struct SyntaxNode(Arc<SyntaxNodeData>);

#[derive(Debug)]
pub struct SyntaxNodeData {
    offset: usize,
    index: usize,
    parent: Option<SyntaxNode>,
    green: GreenNode,
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.offset == other.0.offset
                && self.0.index == other.0.index
                && self.0.green.ptr_eq(&other.0.green)
                && self.0.parent == other.0.parent)
    }
}

impl Eq for SyntaxNode {}

impl SyntaxNode {
    pub fn parent(&self) -> Option<SyntaxNode> {
        self.0.parent.clone()
    }

    pub fn kind(&self) -> NodeKind {
        self.0.green.kind()
    }

    /// The absolute byte offset of this node in the source text.
    pub fn offset(&self) -> usize {
        self.0.offset
    }

    pub fn byte_len(&self) -> usize {
        self.0.green.byte_len()
    }

    /// All children in textual order. Handles are created on every call.
    pub fn children_with_tokens(&self) -> impl Iterator<Item = SyntaxElement> + use<'_> {
        self.0
            .green
            .children()
            .enumerate()
            .map(|(index, child)| match child {
                Child::Token((rel_offset, green)) => Child::Token(SyntaxToken::new(
                    self.offset() + rel_offset,
                    index,
                    self.clone(),
                    green.clone(),
                )),
                Child::Node((rel_offset, green)) => Child::Node(SyntaxNode(Arc::new(
                    SyntaxNodeData {
                        offset: self.offset() + rel_offset,
                        index,
                        parent: Some(self.clone()),
                        green: green.clone(),
                    },
                ))),
            })
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + use<'_> {
        self.children_with_tokens().filter_map(Child::into_node)
    }

    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + use<'_> {
        self.children_with_tokens().filter_map(Child::into_token)
    }

    pub fn first_child(&self) -> Option<SyntaxNode> {
        self.children().next()
    }

    pub fn nth_child(&self, n: usize) -> Option<SyntaxNode> {
        self.children().nth(n)
    }

    /// The next sibling that is a node, skipping over tokens.
    pub fn next_sibling(&self) -> Option<SyntaxNode> {
        self.parent()?
            .children_with_tokens()
            .skip(self.index() + 1)
            .find_map(Child::into_node)
    }

    /// The first token of this subtree, descending into child nodes.
    pub fn first_token(&self) -> Option<SyntaxToken> {
        self.children_with_tokens().find_map(|child| match child {
            Child::Token(token) => Some(token),
            Child::Node(node) => node.first_token(),
        })
    }

    /// The last token of this subtree, descending into child nodes.
    pub fn last_token(&self) -> Option<SyntaxToken> {
        self.children_with_tokens()
            .filter_map(|child| match child {
                Child::Token(token) => Some(token),
                Child::Node(node) => node.last_token(),
            })
            .last()
    }

    pub fn root(&self) -> SyntaxNode {
        iter::successors(Some(self.clone()), SyntaxNode::parent)
            .last()
            .unwrap_or_else(|| self.clone())
    }

    pub fn rewrite(&self, rewrite: impl Fn(&SyntaxNode) -> RewriteAction) -> SyntaxNode {
        Rewriter::new(rewrite).rewrite(self.clone())
    }

    pub(crate) fn new_root(green: GreenNode) -> SyntaxNode {
        SyntaxNode(Arc::new(SyntaxNodeData {
            offset: 0,
            index: 0,
            parent: None,
            green,
        }))
    }

    pub(crate) fn green(&self) -> &GreenNode {
        &self.0.green
    }

    /// Creates a detached copy of this node where the token at child position `index`
    /// is replaced by `token`.
    pub(crate) fn with_replaced_token(&self, index: usize, token: Token) -> SyntaxNode {
        debug_assert!(
            matches!(
                self.children_with_tokens().nth(index),
                Some(Child::Token(_))
            ),
            "child {index} of {:?} is not a token",
            self.kind()
        );
        let mut data: GreenNodeData = self.0.green.data().clone();
        data.replace_child(index, Child::Token((0, GreenToken::new(token))));
        SyntaxNode::new_root(GreenNode::new(data))
    }

    /// The position of this node among all children (nodes and tokens) of its parent.
    pub(crate) fn index(&self) -> usize {
        self.0.index
    }

    #[cfg(test)]
    pub(crate) fn test_text(&self) -> String {
        self.0.green.test_text(0)
    }
}

impl Display for SyntaxNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.green)
    }
}

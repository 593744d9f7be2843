//! Facilities to rewrite a [SyntaxNode]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::child::Child;
use crate::syntax::green::{GreenNode, GreenNodeData};
use crate::syntax::node::SyntaxNode;
use log::trace;

pub enum RewriteAction {
    /// Leave the node as-is and continue with its children
    Leave,
    /// Replace the node (and its whole subtree) with a different one
    Change(SyntaxNode),
}

/// Creates a new tree from an existing one.
///
/// The rewrite action is consulted once per node, top-down. Subtrees that contain no
/// change are shared with the old tree; the old tree itself is never modified, so views
/// created over it keep observing the old shape.
pub struct Rewriter<R: Fn(&SyntaxNode) -> RewriteAction> {
    rewrite_action: R,
}

impl<R: Fn(&SyntaxNode) -> RewriteAction> Rewriter<R> {
    pub fn new(rewrite_action: R) -> Self {
        Rewriter { rewrite_action }
    }

    pub fn rewrite(&self, syntax_node: SyntaxNode) -> SyntaxNode {
        SyntaxNode::new_root(self.rewrite_to_green(&syntax_node))
    }

    fn rewrite_to_green(&self, syntax_node: &SyntaxNode) -> GreenNode {
        match (self.rewrite_action)(syntax_node) {
            RewriteAction::Change(node) => {
                trace!(
                    "replacing {:?}@{} with {:?}",
                    syntax_node.kind(),
                    syntax_node.offset(),
                    node.kind()
                );
                node.green().clone()
            }
            RewriteAction::Leave => {
                let mut changed: Option<GreenNodeData> = None;
                for child in syntax_node.children() {
                    let new_green = self.rewrite_to_green(&child);
                    if !new_green.ptr_eq(child.green()) {
                        changed
                            .get_or_insert_with(|| syntax_node.green().data().clone())
                            .replace_child(child.index(), Child::Node((0, new_green)));
                    }
                }
                match changed {
                    Some(data) => GreenNode::new(data),
                    None => syntax_node.green().clone(),
                }
            }
        }
    }
}

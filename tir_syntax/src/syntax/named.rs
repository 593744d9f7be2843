// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use crate::syntax::node::{SyntaxNode, SyntaxToken};
use crate::syntax::rewrite::RewriteAction;
use crate::syntax::AstNode;

/// A node that is named by one of its identifier tokens.
pub trait NamedElement: AstNode {
    /// The token that carries the name. Must be a direct child of [AstNode::raw].
    fn name_token(&self) -> Option<SyntaxToken>;

    fn name(&self) -> Option<String> {
        self.name_token().map(|token| token.text().to_string())
    }

    /// Returns the root of a new tree in which this element is named `new_name`.
    /// Trivia around the name is kept. The current tree is left untouched.
    ///
    /// Returns `None` if this element has no name.
    fn rename(&self, new_name: &str) -> Option<SyntaxNode> {
        let token = self.name_token()?;
        let target = self.raw();
        debug_assert_eq!(token.parent(), target, "name token is not a direct child");
        let renamed =
            target.with_replaced_token(token.index(), token.green().token().with_text(new_name));
        Some(target.root().rewrite(|node| {
            if node == &target {
                RewriteAction::Change(renamed.clone())
            } else {
                RewriteAction::Leave
            }
        }))
    }
}

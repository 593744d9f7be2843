//! Concrete syntax tree for the Tai-e intermediate representation (TIR).
//!
//! The tree keeps every token and every piece of trivia, so that the source text can be
//! reproduced exactly. Untyped [SyntaxNode](syntax::node::SyntaxNode)s form the tree itself;
//! typed nodes such as [Lvalue](syntax::lvalue::Lvalue) are thin views over them that offer
//! structural queries and take part in visitor dispatch.
//!
//! ```
//! use tir_syntax::syntax::builder::NodeBuilder;
//! use tir_syntax::syntax::lvalue::Lvalue;
//! use tir_syntax::syntax::node_kind::NodeKind;
//! use tir_syntax::syntax::visitor::{TirVisitor, Visitable};
//! use tir_syntax::syntax::AstNode;
//! use tir_syntax::tir;
//!
//! let mut builder = NodeBuilder::new();
//! builder.start_node(NodeKind::Lvalue);
//! builder.start_node(NodeKind::IdentifierVariable);
//! builder.push_all(tir! { r0 });
//! builder.end_node();
//! builder.push_all(tir! { . });
//! builder.start_node(NodeKind::FieldSig);
//! builder.push_all(tir! { < A : int f > });
//! builder.end_node();
//! let lvalue = Lvalue::cast(builder.finish()).unwrap();
//!
//! assert_eq!(lvalue.identifier_variables().len(), 1);
//! assert_eq!(lvalue.field_sig().unwrap().field_name().unwrap().text(), "f");
//!
//! struct FieldWrites(usize);
//!
//! impl TirVisitor for FieldWrites {
//!     fn visit_lvalue(&mut self, lvalue: &Lvalue) {
//!         if lvalue.is_field_access() {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut writes = FieldWrites(0);
//! lvalue.accept(&mut writes);
//! assert_eq!(writes.0, 1);
//! ```
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

#[macro_use]
pub mod tokens;
pub mod syntax;

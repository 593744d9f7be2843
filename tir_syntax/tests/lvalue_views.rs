// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tir_syntax::syntax::builder::NodeBuilder;
use tir_syntax::syntax::field_sig::FieldSig;
use tir_syntax::syntax::identifier_variable::IdentifierVariable;
use tir_syntax::syntax::lvalue::Lvalue;
use tir_syntax::syntax::named::NamedElement;
use tir_syntax::syntax::node::{SyntaxNode, SyntaxToken};
use tir_syntax::syntax::node_kind::NodeKind;
use tir_syntax::syntax::rewrite::RewriteAction;
use tir_syntax::syntax::visitor::{walk, SyntaxVisitor, TirVisitor, Visitable};
use tir_syntax::syntax::{AstNode, KindMismatch};
use tir_syntax::tokens::{Token, TokenKind, Trivia, TriviaPiece};
use tir_syntax::tok;

fn variable(builder: &mut NodeBuilder, name: &str) {
    builder.start_node(NodeKind::IdentifierVariable);
    builder.push(Token::identifier(name));
    builder.end_node();
}

fn space() -> Trivia {
    Trivia::new([TriviaPiece::Spaces(1)])
}

fn field_sig(builder: &mut NodeBuilder, name: &str) {
    builder.start_node(NodeKind::FieldSig);
    builder.push(tok![<]);
    builder.push(Token::identifier("Obj"));
    builder.push(tok![:].with_trailing_trivia(space()));
    builder.push(Token::identifier("int").with_trailing_trivia(space()));
    builder.push(Token::identifier(name));
    builder.push(tok![>]);
    builder.end_node();
}

fn lvalue(build: impl FnOnce(&mut NodeBuilder)) -> Lvalue {
    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::Lvalue);
    build(&mut builder);
    Lvalue::cast(builder.finish()).unwrap()
}

fn field_access() -> Lvalue {
    lvalue(|b| {
        variable(b, "obj");
        b.push(tok![.]);
        field_sig(b, "field");
    })
}

#[test]
fn field_signature_without_variables() {
    let lvalue = lvalue(|b| field_sig(b, "field"));
    let field_sig = lvalue.field_sig().unwrap();
    assert_eq!(field_sig.name().as_deref(), Some("field"));
    assert_eq!(lvalue.identifier_variables(), vec![]);
}

#[test]
fn variable_without_field_signature() {
    let lvalue = lvalue(|b| variable(b, "x"));
    assert_eq!(lvalue.field_sig(), None);
    let variables = lvalue.identifier_variables();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name().as_deref(), Some("x"));
    assert_eq!(variables[0].raw().parent(), Some(lvalue.raw()));
}

#[test]
fn views_over_separate_trees_are_distinct() {
    let first = lvalue(|b| variable(b, "x"));
    let second = lvalue(|b| variable(b, "x"));
    assert_eq!(first.to_string(), second.to_string());
    assert_ne!(first, second);
    assert_ne!(first.raw(), second.raw());
    assert_ne!(first.identifier_variables(), second.identifier_variables());

    let same = Lvalue::cast(first.raw()).unwrap();
    assert_eq!(same, first);
    assert_eq!(same.identifier_variables(), first.identifier_variables());
}

#[test]
fn typed_nodes_reject_other_kinds() {
    let lvalue = field_access();
    let error = FieldSig::try_from(lvalue.raw()).unwrap_err();
    assert_eq!(
        error,
        KindMismatch {
            expected: NodeKind::FieldSig,
            found: NodeKind::Lvalue
        }
    );
    assert_eq!(error.to_string(), "Expected FieldSig node, found Lvalue");
    assert_matches!(IdentifierVariable::cast(lvalue.raw()), None);
}

#[test]
fn queries_reflect_the_rewritten_tree() {
    let old = field_access();
    let new_root = old.raw().rewrite(|node| match node.kind() {
        NodeKind::FieldSig => {
            let mut builder = NodeBuilder::new();
            builder.start_node(NodeKind::IdentifierVariable);
            builder.push(Token::identifier("i0"));
            RewriteAction::Change(builder.finish())
        }
        _ => RewriteAction::Leave,
    });
    let new = Lvalue::cast(new_root).unwrap();
    assert_eq!(new.to_string(), "obj.i0");
    assert_eq!(new.field_sig(), None);
    let names: Vec<_> = new
        .identifier_variables()
        .iter()
        .filter_map(|variable| variable.name())
        .collect();
    assert_eq!(names, vec!["obj", "i0"]);
    assert_eq!(new.identifier_variables()[1].raw().offset(), 4);

    assert!(old.is_field_access());
    assert_eq!(old.to_string(), "obj.<Obj: int field>");
}

#[test]
fn rename_keeps_surrounding_text() {
    let lvalue = field_access();
    let renamed = Lvalue::cast(lvalue.identifier_variables()[0].rename("base").unwrap()).unwrap();
    assert_eq!(renamed.to_string(), "base.<Obj: int field>");
    assert_eq!(renamed.field_sig().unwrap().raw().offset(), 5);
}

/// Visitor that implements both protocols and records which path was taken.
#[derive(Default)]
struct Bilingual {
    typed: Vec<Lvalue>,
    generic: Vec<NodeKind>,
}

impl TirVisitor for Bilingual {
    fn visit_lvalue(&mut self, lvalue: &Lvalue) {
        self.typed.push(lvalue.clone());
    }
}

impl SyntaxVisitor for Bilingual {
    fn visit_node(&mut self, node: &SyntaxNode) {
        self.generic.push(node.kind());
        walk(self, node);
    }

    fn as_tir_visitor(&mut self) -> Option<&mut dyn TirVisitor> {
        Some(self)
    }
}

/// Visitor that only knows about untyped nodes.
#[derive(Default)]
struct Generic {
    nodes: Vec<NodeKind>,
    tokens: Vec<TokenKind>,
}

impl SyntaxVisitor for Generic {
    fn visit_node(&mut self, node: &SyntaxNode) {
        self.nodes.push(node.kind());
        walk(self, node);
    }

    fn visit_token(&mut self, token: &SyntaxToken) {
        self.tokens.push(token.kind());
    }
}

#[test]
fn generic_entry_point_uses_typed_protocol_when_available() {
    let lvalue = field_access();
    let mut visitor = Bilingual::default();
    lvalue.accept_generic(&mut visitor);
    assert_eq!(visitor.typed, vec![lvalue]);
    assert!(visitor.generic.is_empty());
}

#[test]
fn generic_entry_point_falls_back_to_child_traversal() {
    let lvalue = field_access();
    let mut visitor = Generic::default();
    lvalue.accept_generic(&mut visitor);
    assert_eq!(
        visitor.nodes,
        vec![
            NodeKind::Lvalue,
            NodeKind::IdentifierVariable,
            NodeKind::FieldSig
        ]
    );
    assert_eq!(
        visitor.tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::LT,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::GT,
        ]
    );
}

#[test]
fn typed_entry_point_is_called_exactly_once() {
    let lvalue = field_access();
    let mut visitor = Bilingual::default();
    lvalue.accept(&mut visitor);
    lvalue.accept(&mut visitor);
    assert_eq!(visitor.typed, vec![lvalue.clone(), lvalue]);
    assert!(visitor.generic.is_empty());
}

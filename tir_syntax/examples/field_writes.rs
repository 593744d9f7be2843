// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

//! Showcases how a simple analysis could list all field writes of a TIR fragment,
//! mixing a generic traversal (for statements) with typed dispatch (for lvalues).
#[macro_use]
extern crate log;

use tir_syntax::syntax::builder::NodeBuilder;
use tir_syntax::syntax::lvalue::Lvalue;
use tir_syntax::syntax::node::SyntaxNode;
use tir_syntax::syntax::node_kind::NodeKind;
use tir_syntax::syntax::visitor::{walk, SyntaxVisitor, TirVisitor};
use tir_syntax::syntax::AstNode;
use tir_syntax::tokens::{Token, TokenKind, Trivia, TriviaPiece};
use tir_syntax::tok;

#[derive(Default)]
struct FieldWrites {
    writes: Vec<String>,
}

impl TirVisitor for FieldWrites {
    fn visit_lvalue(&mut self, lvalue: &Lvalue) {
        let Some(field_sig) = lvalue.field_sig() else {
            return;
        };
        let base = match lvalue.identifier_variables().first() {
            Some(variable) => variable.to_string(),
            None => "<static>".to_string(),
        };
        self.writes.push(format!(
            "{}: {} written through {}",
            field_sig.raw().offset(),
            field_sig,
            base
        ));
    }
}

impl SyntaxVisitor for FieldWrites {
    fn visit_node(&mut self, node: &SyntaxNode) {
        debug!("entering {:?}", node.kind());
        walk(self, node)
    }

    fn as_tir_visitor(&mut self) -> Option<&mut dyn TirVisitor> {
        Some(self)
    }
}

fn statement(builder: &mut NodeBuilder, lvalue: impl FnOnce(&mut NodeBuilder), rhs: &str) {
    let newline = Trivia::new([TriviaPiece::LineFeeds(1)]);
    let space = || Trivia::new([TriviaPiece::Spaces(1)]);
    builder.start_node(NodeKind::AssignStatement);
    builder.start_node(NodeKind::Lvalue);
    lvalue(builder);
    builder.end_node();
    builder.push(
        Token::punct(TokenKind::EQ)
            .with_leading_trivia(space())
            .with_trailing_trivia(space()),
    );
    builder.start_node(NodeKind::IdentifierVariable);
    builder.push(Token::identifier(rhs));
    builder.end_node();
    builder.push(Token::punct(TokenKind::SemiColon).with_trailing_trivia(newline));
    builder.end_node();
}

fn variable(builder: &mut NodeBuilder, name: &str) {
    builder.start_node(NodeKind::IdentifierVariable);
    builder.push(Token::identifier(name));
    builder.end_node();
}

fn field_sig(builder: &mut NodeBuilder, class: &str, ty: &str, name: &str) {
    let space = || Trivia::new([TriviaPiece::Spaces(1)]);
    builder.start_node(NodeKind::FieldSig);
    builder.push(tok![<]);
    builder.push(Token::identifier(class));
    builder.push(tok![:].with_trailing_trivia(space()));
    builder.push(Token::identifier(ty).with_trailing_trivia(space()));
    builder.push(Token::identifier(name));
    builder.push(tok![>]);
    builder.end_node();
}

fn main() {
    env_logger::init();

    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::File);
    statement(&mut builder, |b| variable(b, "r1"), "%this");
    statement(
        &mut builder,
        |b| {
            variable(b, "r1");
            b.push(tok![.]);
            field_sig(b, "Point", "int", "x");
        },
        "i0",
    );
    statement(
        &mut builder,
        |b| field_sig(b, "Point", "int", "count"),
        "i1",
    );
    let file = builder.finish();
    print!("{file}");

    let mut analysis = FieldWrites::default();
    file.accept(&mut analysis);
    for write in analysis.writes {
        println!("{write}");
    }
}

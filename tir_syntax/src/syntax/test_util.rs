// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c)  2025, Lukas Scheller lukasscheller@icloud.com

//! Trees that are shared between the unit tests.

use crate::syntax::builder::NodeBuilder;
use crate::syntax::lvalue::Lvalue;
use crate::syntax::node::SyntaxNode;
use crate::syntax::node_kind::NodeKind;
use crate::syntax::AstNode;
use crate::tokens::{Token, TokenKind, Trivia, TriviaPiece};

fn space() -> Trivia {
    Trivia::new([TriviaPiece::Spaces(1)])
}

pub(crate) fn push_variable(builder: &mut NodeBuilder, name: &str) {
    builder.start_node(NodeKind::IdentifierVariable);
    builder.push(Token::identifier(name));
    builder.end_node();
}

/// Pushes `<class: ty name>`
pub(crate) fn push_field_sig(builder: &mut NodeBuilder, class: &str, ty: &str, name: &str) {
    builder.start_node(NodeKind::FieldSig);
    builder.push(Token::punct(TokenKind::LT));
    builder.push(Token::identifier(class));
    builder.push(Token::punct(TokenKind::Colon).with_trailing_trivia(space()));
    builder.push(Token::identifier(ty).with_trailing_trivia(space()));
    builder.push(Token::identifier(name));
    builder.push(Token::punct(TokenKind::GT));
    builder.end_node();
}

fn finish_lvalue(builder: NodeBuilder) -> Lvalue {
    Lvalue::cast(builder.finish()).expect("root is an lvalue")
}

/// `x`
pub(crate) fn local_variable(name: &str) -> Lvalue {
    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::Lvalue);
    push_variable(&mut builder, name);
    finish_lvalue(builder)
}

/// `<Obj: int field>`
pub(crate) fn static_field() -> Lvalue {
    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::Lvalue);
    push_field_sig(&mut builder, "Obj", "int", "field");
    finish_lvalue(builder)
}

/// `r0.<A: int f>`
pub(crate) fn instance_field() -> Lvalue {
    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::Lvalue);
    push_variable(&mut builder, "r0");
    builder.push(Token::punct(TokenKind::Dot));
    push_field_sig(&mut builder, "A", "int", "f");
    finish_lvalue(builder)
}

/// `r1[i2]`
pub(crate) fn array_access() -> Lvalue {
    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::Lvalue);
    push_variable(&mut builder, "r1");
    builder.push(Token::punct(TokenKind::LeftSquare));
    push_variable(&mut builder, "i2");
    builder.push(Token::punct(TokenKind::RightSquare));
    finish_lvalue(builder)
}

/// `r0.<A: int f> = %this;` wrapped in a `File` node
pub(crate) fn assignment_file() -> SyntaxNode {
    let mut builder = NodeBuilder::new();
    builder.start_node(NodeKind::File);
    builder.start_node(NodeKind::AssignStatement);
    builder.start_node(NodeKind::Lvalue);
    push_variable(&mut builder, "r0");
    builder.push(Token::punct(TokenKind::Dot));
    push_field_sig(&mut builder, "A", "int", "f");
    builder.end_node();
    builder.push(
        Token::punct(TokenKind::EQ)
            .with_leading_trivia(space())
            .with_trailing_trivia(space()),
    );
    push_variable(&mut builder, "%this");
    builder.push(Token::punct(TokenKind::SemiColon));
    builder.end_node();
    builder.finish()
}

/* src/server/core/rust/src/injector/parser.rs */

use super::ast::{AstNode, SlotMode};
use super::token::Token;

pub(super) fn parse(tokens: &[Token]) -> Vec<AstNode> {
  let mut pos = 0;
  parse_until(tokens, &mut pos, &|_| false)
}

fn parse_until(tokens: &[Token], pos: &mut usize, stop: &dyn Fn(&str) -> bool) -> Vec<AstNode> {
  let mut nodes = Vec::new();

  while *pos < tokens.len() {
    match &tokens[*pos] {
      Token::Text(value) => {
        nodes.push(AstNode::Text(value.clone()));
        *pos += 1;
      }
      Token::Marker(directive) => {
        if stop(directive) {
          return nodes;
        }
        *pos += 1;

        if let Some(path) = directive.strip_prefix("if:") {
          let endif_tag = format!("endif:{path}");
          let then_nodes = parse_until(tokens, pos, &|d| d == "else" || d == endif_tag);

          let else_nodes = if matches!(tokens.get(*pos), Some(Token::Marker(d)) if d == "else") {
            *pos += 1;
            parse_until(tokens, pos, &|d| d == endif_tag)
          } else {
            Vec::new()
          };

          // Skip endif token
          if *pos < tokens.len() {
            *pos += 1;
          }
          nodes.push(AstNode::If { path: path.to_string(), then_nodes, else_nodes });
        } else if let Some(path) = directive.strip_prefix("each:") {
          let body_nodes = parse_until(tokens, pos, &|d| d == "endeach");
          // Skip endeach token
          if *pos < tokens.len() {
            *pos += 1;
          }
          nodes.push(AstNode::Each { path: path.to_string(), body_nodes });
        } else if let Some(path) = directive.strip_suffix(":html") {
          nodes.push(AstNode::Slot { path: path.to_string(), mode: SlotMode::Html });
        } else {
          nodes.push(AstNode::Slot { path: directive.clone(), mode: SlotMode::Text });
        }
      }
    }
  }

  nodes
}

/* src/server/core/rust/src/injector/render.rs */

use serde_json::Value;

use super::ast::{AstNode, SlotMode};
use super::helpers::{escape_html, is_truthy, resolve, stringify};

#[derive(Default)]
pub(super) struct RenderContext {
  /// Slot paths that had no value; rendered as the path itself.
  pub(super) missing: Vec<String>,
}

pub(super) fn render(nodes: &[AstNode], data: &Value, ctx: &mut RenderContext) -> String {
  let mut out = String::new();

  for node in nodes {
    match node {
      AstNode::Text(value) => out.push_str(value),

      AstNode::Slot { path, mode } => {
        let text = match resolve(path, data) {
          Some(value) => stringify(value),
          None => {
            if !ctx.missing.contains(path) {
              ctx.missing.push(path.clone());
            }
            path.clone()
          }
        };
        match mode {
          SlotMode::Html => out.push_str(&text),
          SlotMode::Text => out.push_str(&escape_html(&text)),
        }
      }

      AstNode::If { path, then_nodes, else_nodes } => {
        if resolve(path, data).is_some_and(is_truthy) {
          out.push_str(&render(then_nodes, data, ctx));
        } else {
          out.push_str(&render(else_nodes, data, ctx));
        }
      }

      AstNode::Each { path, body_nodes } => {
        if let Some(Value::Array(arr)) = resolve(path, data) {
          for item in arr {
            // Clone data and inject the `$` scope for the current item
            let scoped = if let Value::Object(map) = data {
              let mut new_map = map.clone();
              new_map.insert("$".to_string(), item.clone());
              Value::Object(new_map)
            } else {
              data.clone()
            };
            out.push_str(&render(body_nodes, &scoped, ctx));
          }
        }
      }
    }
  }

  out
}

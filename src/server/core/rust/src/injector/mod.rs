/* src/server/core/rust/src/injector/mod.rs */

//! Slot-marker templating. Templates are plain HTML with `<!--site:...-->`
//! directives:
//!
//! - `<!--site:a.b-->` text slot, HTML-escaped
//! - `<!--site:a.b:html-->` raw slot
//! - `<!--site:if:a-->...<!--site:else-->...<!--site:endif:a-->`
//! - `<!--site:each:list-->...<!--site:$.field-->...<!--site:endeach-->`

mod ast;
mod helpers;
mod parser;
mod render;
mod token;

use parser::parse;
use render::{RenderContext, render};
use token::tokenize;

use serde_json::Value;

/// Rendered output plus the slot paths that resolved to nothing.
#[derive(Debug)]
pub struct Injected {
  pub html: String,
  pub missing: Vec<String>,
}

pub fn inject(template: &str, data: &Value) -> Injected {
  let tokens = tokenize(template);
  let ast = parse(&tokens);
  let mut ctx = RenderContext::default();
  let html = render(&ast, data, &mut ctx);
  Injected { html, missing: ctx.missing }
}

/* src/server/core/rust/src/injector/helpers.rs */

use serde_json::Value;

pub(super) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = current.get(key)?;
  }
  Some(current)
}

pub(super) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(arr) => !arr.is_empty(),
    Value::Object(_) => true,
  }
}

pub(super) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

pub(super) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn resolve_nested_path() {
    let data = json!({"footer": {"madeIn": "Made in Germany"}});
    assert_eq!(resolve("footer.madeIn", &data), Some(&json!("Made in Germany")));
  }

  #[test]
  fn resolve_missing_or_partial() {
    let data = json!({"nav": "flat"});
    assert_eq!(resolve("missing", &data), None);
    assert_eq!(resolve("nav.features", &data), None);
  }

  #[test]
  fn truthiness() {
    assert!(is_truthy(&json!(true)));
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!(2)));
    assert!(is_truthy(&json!({})));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!([])));
  }

  #[test]
  fn stringify_scalars() {
    assert_eq!(stringify(&json!(null)), "");
    assert_eq!(stringify(&json!(2026)), "2026");
    assert_eq!(stringify(&json!("Docbase")), "Docbase");
  }

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    assert_eq!(escape_html("Datenschutzerklärung"), "Datenschutzerklärung");
  }
}

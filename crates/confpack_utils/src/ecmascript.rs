use oxc::syntax::identifier;

pub fn is_valid_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Renders `obj.prop`, falling back to `obj["prop"]` when `prop` is not a
/// valid identifier name.
pub fn property_access_str(obj: &str, prop: &str) -> String {
  if is_valid_identifier_name(prop) {
    format!("{obj}.{prop}")
  } else {
    format!("{obj}[{}]", serde_json::to_string(prop).unwrap())
  }
}

#[test]
fn test_is_valid_identifier_name() {
  assert!(is_valid_identifier_name("globalConfig"));
  assert!(!is_valid_identifier_name("1aaaa"));
  assert!(!is_valid_identifier_name("😈"));
}

#[test]
fn test_property_access_str() {
  assert_eq!(property_access_str("window", "globalConfig"), "window.globalConfig");
  assert_eq!(property_access_str("window", "app config"), "window[\"app config\"]");
}

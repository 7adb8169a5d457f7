use confpack_ecmascript::EcmaCompiler;
use confpack_error::BuildResult;
use confpack_utils::ecmascript::property_access_str;

/// Renders the self-invoking script that mounts the configuration value on
/// the browser global object, then reprints it through the codegen so the
/// emitted asset is stable no matter how the JSON text was shaped.
pub fn render_config_script(
  global_config_name: &str,
  config_json: Option<&str>,
) -> BuildResult<String> {
  // `JSON.stringify` renders values it cannot represent as `undefined`; the
  // assignment keeps that behavior visible instead of dropping the property.
  let value = config_json.unwrap_or("undefined");
  let binding = property_access_str("window", global_config_name);

  EcmaCompiler::format(&format!("(function() {{\n  {binding} = {value};\n}})(window);\n"))
}

#[test]
fn mounts_the_value_on_the_global_object() {
  let script = render_config_script("globalConfig", Some(r#"{"a":1}"#)).unwrap();
  assert!(script.starts_with("(function"));
  assert!(script.contains("window.globalConfig = "));
  assert!(script.contains("(window)"));
}

#[test]
fn non_identifier_names_fall_back_to_bracket_notation() {
  let script = render_config_script("app config", Some("1")).unwrap();
  assert!(script.contains(r#"window["app config"] = 1;"#));
}

#[test]
fn json_undefined_renders_the_undefined_literal() {
  let script = render_config_script("globalConfig", None).unwrap();
  assert!(script.contains("window.globalConfig = undefined;"));
}

#[test]
fn identical_inputs_render_byte_identical_scripts() {
  let json = r#"{"api":"http://localhost:3000","retries":3}"#;
  let first = render_config_script("globalConfig", Some(json)).unwrap();
  let second = render_config_script("globalConfig", Some(json)).unwrap();
  assert_eq!(first, second);
}

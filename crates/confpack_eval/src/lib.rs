use confpack_error::BuildResult;
use rquickjs::{CatchResultExt, Context, Module, Runtime, Value};

/// Evaluates compiled configuration code as an ES module and returns the
/// engine's `JSON.stringify` rendering of its `default` export. `None` means
/// the export stringifies to `undefined` (a value JSON cannot represent).
///
/// The engine lives and dies inside this call. Nothing touches the
/// filesystem, so concurrent builds share no state here.
pub fn evaluate_default_export(code: &str) -> BuildResult<Option<String>> {
  let runtime = Runtime::new().map_err(anyhow::Error::from)?;
  let context = Context::full(&runtime).map_err(anyhow::Error::from)?;

  context.with(|ctx| {
    let declared = Module::declare(ctx.clone(), "globalConfig", code)
      .catch(&ctx)
      .map_err(|error| anyhow::anyhow!("{error}"))?;

    let (module, promise) =
      declared.eval().catch(&ctx).map_err(|error| anyhow::anyhow!("{error}"))?;
    promise.finish::<()>().catch(&ctx).map_err(|error| anyhow::anyhow!("{error}"))?;

    let default_export: Value = module
      .namespace()
      .and_then(|namespace| namespace.get("default"))
      .catch(&ctx)
      .map_err(|error| anyhow::anyhow!("{error}"))?;

    // JSON.stringify inside the engine keeps the exact JSON semantics the
    // runtime snippet relies on: `undefined` members are omitted, `toJSON`
    // is honored, circular values throw.
    let json = ctx
      .json_stringify(default_export)
      .catch(&ctx)
      .map_err(|error| anyhow::anyhow!("{error}"))?;

    match json {
      Some(text) => Ok(Some(text.to_string().map_err(anyhow::Error::from)?)),
      None => Ok(None),
    }
  })
}

#[test]
fn evaluates_the_default_export() {
  let json = evaluate_default_export("export default { a: 1 };").unwrap();
  assert_eq!(json.as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn executes_module_code_before_serializing() {
  let json = evaluate_default_export(
    "const port = 3000;\nexport default { api: `http://localhost:${port}` };",
  )
  .unwrap();
  assert_eq!(json.as_deref(), Some(r#"{"api":"http://localhost:3000"}"#));
}

#[test]
fn undefined_default_export_has_no_json_form() {
  let json = evaluate_default_export("export default undefined;").unwrap();
  assert_eq!(json, None);

  // A module without a default export behaves the same way.
  let json = evaluate_default_export("export const a = 1;").unwrap();
  assert_eq!(json, None);
}

#[test]
fn surfaces_engine_exceptions() {
  // Circular values make JSON.stringify throw inside the engine.
  let result = evaluate_default_export("const o = {};\no.self = o;\nexport default o;");
  assert!(result.is_err());

  let result = evaluate_default_export("export default (");
  assert!(result.is_err());
}

mod inject_script_into_html;
mod render_config_script;

use std::io;
use std::sync::Arc;

use ansi_term::Colour;
use confpack_common::{
  Compilation, CompilationAsset, GlobalConfigOptions, NormalizedGlobalConfigOptions,
};
use confpack_ecmascript::EcmaCompiler;
use confpack_error::{BuildError, BuildResult};
use confpack_eval::evaluate_default_export;
use confpack_fs::{FileSystem, OsFileSystem};
use confpack_plugin::Plugin;
use sugar_path::SugarPath;

use crate::plugins::global_config::inject_script_into_html::inject_script_into_html;
use crate::plugins::global_config::render_config_script::render_config_script;
use crate::utils::normalize_options::normalize_options;

/// Injects a runtime global-configuration object into the html template
/// during the emit phase: the configuration source is compiled to plain
/// JavaScript, evaluated, serialized onto `window`, emitted as a script
/// asset, and a `<script>` tag loading that asset is prepended to the
/// template's `<body>`.
pub struct GlobalConfigPlugin {
  options: NormalizedGlobalConfigOptions,
  fs: Arc<dyn FileSystem>,
}

impl GlobalConfigPlugin {
  pub fn new(options: GlobalConfigOptions) -> Self {
    Self::with_fs(options, Arc::new(OsFileSystem))
  }

  /// The same plugin reading its configuration source through a
  /// caller-supplied filesystem.
  pub fn with_fs(options: GlobalConfigOptions, fs: Arc<dyn FileSystem>) -> Self {
    Self { options: normalize_options(options), fs }
  }

  fn load_config_source(&self) -> BuildResult<String> {
    let path = self.options.global_config_file_path.as_path().absolutize_with(&self.options.cwd);
    self.fs.read_to_string(&path).map_err(|error| {
      if error.kind() == io::ErrorKind::NotFound {
        // The message names the path as the user wrote it.
        BuildError::config_file_not_found(&self.options.global_config_file_path)
      } else {
        anyhow::Error::from(error).into()
      }
    })
  }

  fn inject(&self, compilation: &mut Compilation) -> BuildResult<()> {
    let source = self.load_config_source()?;

    let compiled = EcmaCompiler::compile_typescript(
      &source,
      &self.options.global_config_file_path,
      self.options.target.into(),
    )?;
    if compiled.trim().is_empty() {
      compilation.warnings.push(anyhow::anyhow!(
        "配置文件{}编译结果为空，已跳过注入",
        self.options.global_config_file_path
      ));
      return Ok(());
    }

    let config_json = evaluate_default_export(&compiled)?;
    let script = render_config_script(&self.options.global_config_name, config_json.as_deref())?;

    // The template is looked up before anything is emitted, so a failure
    // here leaves the compilation exactly as it was.
    let template_name = &self.options.template_html_name;
    let Some(template) = compilation.assets.get(template_name) else {
      return Err(BuildError::template_asset_missing(template_name));
    };

    let script_asset_name = self.options.script_asset_name();
    let html = inject_script_into_html(template.source(), &script_asset_name)?;

    compilation.emit_asset(script_asset_name, CompilationAsset::new(script));
    compilation.emit_asset(template_name.clone(), CompilationAsset::new(html));

    Ok(())
  }
}

#[async_trait::async_trait]
impl Plugin for GlobalConfigPlugin {
  fn name(&self) -> &'static str {
    "GlobalConfigPlugin"
  }

  /// A failure never fails the build: every error becomes one console line
  /// and the hook completes normally. Whatever the pipeline emitted before
  /// the failing step stays as-is; there is no rollback.
  #[allow(clippy::print_stdout)]
  async fn emit(&self, compilation: &mut Compilation) -> BuildResult<()> {
    if let Err(errors) = self.inject(compilation) {
      for error in &*errors {
        println!("错误: {}", Colour::Red.paint(error.to_string()));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
fn testing_plugin(files: &[(&str, &str)], mut options: GlobalConfigOptions) -> GlobalConfigPlugin {
  options.cwd = Some(std::path::PathBuf::from("/app"));
  GlobalConfigPlugin::with_fs(options, Arc::new(confpack_fs::MemoryFileSystem::new(files)))
}

#[cfg(test)]
fn compilation_with_template(html: &str) -> Compilation {
  let mut compilation = Compilation::new();
  compilation.emit_asset("index.html", CompilationAsset::new(html));
  compilation
}

/// Runs the emitted script against a stub `window` and returns
/// `JSON.stringify` of the property it was supposed to mount.
#[cfg(test)]
fn evaluate_script_asset(script: &str, global_config_name: &str) -> Option<String> {
  let runtime = rquickjs::Runtime::new().unwrap();
  let context = rquickjs::Context::full(&runtime).unwrap();
  context.with(|ctx| {
    let probe = confpack_utils::ecmascript::property_access_str("window", global_config_name);
    ctx
      .eval::<Option<String>, _>(format!("const window = {{}};\n{script}\nJSON.stringify({probe})"))
      .unwrap()
  })
}

#[cfg(test)]
#[tokio::test]
async fn injects_the_default_export_onto_the_window_global() {
  let plugin = testing_plugin(
    &[("/globalConfig.ts", "export default { a: 1 };")],
    GlobalConfigOptions::default(),
  );
  let mut compilation = compilation_with_template("<html><body></body></html>");
  plugin.emit(&mut compilation).await.unwrap();

  let json = evaluate_script_asset(compilation.assets["globalConfig.js"].source(), "globalConfig")
    .unwrap();
  assert_eq!(
    serde_json::from_str::<serde_json::Value>(&json).unwrap(),
    serde_json::json!({ "a": 1 })
  );

  assert_eq!(
    compilation.assets["index.html"].source(),
    r#"<html><body><script src="globalConfig.js"></script></body></html>"#
  );
}

#[cfg(test)]
#[tokio::test]
async fn missing_config_file_reports_the_configured_path() {
  let plugin = testing_plugin(&[], GlobalConfigOptions::default());
  let mut compilation = compilation_with_template("<html><body></body></html>");

  let errors = plugin.inject(&mut compilation).unwrap_err();
  assert_eq!(errors[0].to_string(), "请检查文件../../globalConfig.ts是否存在");

  // The emit hook swallows the failure and leaves the assets untouched.
  plugin.emit(&mut compilation).await.unwrap();
  assert_eq!(compilation.assets.len(), 1);
  assert_eq!(compilation.assets["index.html"].source(), "<html><body></body></html>");
}

#[cfg(test)]
#[tokio::test]
async fn missing_template_asset_reports_the_template_name() {
  let plugin = testing_plugin(
    &[("/globalConfig.ts", "export default { a: 1 };")],
    GlobalConfigOptions::default(),
  );
  let mut compilation = Compilation::new();

  let errors = plugin.inject(&mut compilation).unwrap_err();
  assert_eq!(errors[0].to_string(), "请检查文件index.html是否存在");
  assert!(compilation.assets.is_empty());

  plugin.emit(&mut compilation).await.unwrap();
  assert!(compilation.assets.is_empty());
}

#[test]
fn malformed_config_source_surfaces_the_transformer_message() {
  let plugin =
    testing_plugin(&[("/globalConfig.ts", "const = ;")], GlobalConfigOptions::default());
  let mut compilation = compilation_with_template("<html><body></body></html>");

  let errors = plugin.inject(&mut compilation).unwrap_err();
  assert!(!errors.is_empty());
  assert_eq!(compilation.assets.len(), 1);
}

#[cfg(test)]
#[tokio::test]
async fn empty_config_source_warns_and_skips_injection() {
  let plugin = testing_plugin(
    &[("/globalConfig.ts", "type AppConfig = { api: string };\n")],
    GlobalConfigOptions::default(),
  );
  let mut compilation = compilation_with_template("<html><body></body></html>");
  plugin.emit(&mut compilation).await.unwrap();

  assert_eq!(compilation.assets.len(), 1);
  assert_eq!(compilation.assets["index.html"].source(), "<html><body></body></html>");
  assert_eq!(compilation.warnings.len(), 1);
  assert!(compilation.warnings[0].to_string().contains("../../globalConfig.ts"));
}

#[cfg(test)]
#[tokio::test]
async fn preserves_unrelated_assets() {
  let plugin = testing_plugin(
    &[("/globalConfig.ts", "export default { a: 1 };")],
    GlobalConfigOptions::default(),
  );
  let mut compilation = compilation_with_template("<html><body></body></html>");
  compilation.emit_asset("main.js", CompilationAsset::new("console.log(1);"));
  plugin.emit(&mut compilation).await.unwrap();

  assert_eq!(compilation.assets.len(), 3);
  assert_eq!(compilation.assets["main.js"].source(), "console.log(1);");
}

#[cfg(test)]
#[tokio::test]
async fn fresh_runs_with_unchanged_inputs_are_byte_identical() {
  let files: &[(&str, &str)] = &[(
    "/globalConfig.ts",
    "const port: number = 3000;\nexport default { api: `http://localhost:${port}` };",
  )];

  let mut outputs = Vec::new();
  for _ in 0..2 {
    let plugin = testing_plugin(files, GlobalConfigOptions::default());
    let mut compilation = compilation_with_template("<html><body></body></html>");
    plugin.emit(&mut compilation).await.unwrap();
    outputs.push((
      compilation.assets["globalConfig.js"].source().to_string(),
      compilation.assets["index.html"].source().to_string(),
    ));
  }

  assert_eq!(outputs[0], outputs[1]);
}

#[cfg(test)]
#[tokio::test]
async fn round_trips_json_values_and_omits_what_json_cannot_represent() {
  let plugin = testing_plugin(
    &[(
      "/globalConfig.ts",
      r#"export default {
  api: "https://example.com",
  retries: 3,
  flags: { beta: true, experiments: [1, 2, 3] },
  ignored: undefined,
};"#,
    )],
    GlobalConfigOptions::default(),
  );
  let mut compilation = compilation_with_template("<html><body></body></html>");
  plugin.emit(&mut compilation).await.unwrap();

  let json = evaluate_script_asset(compilation.assets["globalConfig.js"].source(), "globalConfig")
    .unwrap();
  assert_eq!(
    serde_json::from_str::<serde_json::Value>(&json).unwrap(),
    serde_json::json!({
      "api": "https://example.com",
      "retries": 3,
      "flags": { "beta": true, "experiments": [1, 2, 3] }
    })
  );
}

#[cfg(test)]
#[tokio::test]
async fn non_identifier_global_names_use_bracket_notation() {
  let options = GlobalConfigOptions {
    global_config_name: Some("app config".to_string()),
    ..GlobalConfigOptions::default()
  };
  let plugin = testing_plugin(&[("/globalConfig.ts", "export default { a: 1 };")], options);
  let mut compilation = compilation_with_template("<html><body></body></html>");
  plugin.emit(&mut compilation).await.unwrap();

  let script = compilation.assets["app config.js"].source();
  assert!(script.contains(r#"window["app config"]"#));
  assert!(compilation.assets["index.html"]
    .source()
    .contains(r#"<script src="app config.js"></script>"#));

  let json = evaluate_script_asset(script, "app config").unwrap();
  assert_eq!(
    serde_json::from_str::<serde_json::Value>(&json).unwrap(),
    serde_json::json!({ "a": 1 })
  );
}

#[cfg(test)]
#[tokio::test]
async fn honors_configured_names_and_relative_paths() {
  let options = GlobalConfigOptions {
    template_html_name: Some("app.html".to_string()),
    global_config_file_path: Some("./config/runtime.ts".to_string()),
    ..GlobalConfigOptions::default()
  };
  let plugin =
    testing_plugin(&[("/app/config/runtime.ts", r#"export default { mode: "dev" };"#)], options);

  let mut compilation = Compilation::new();
  compilation.emit_asset("app.html", CompilationAsset::new("<html><body></body></html>"));
  plugin.emit(&mut compilation).await.unwrap();

  assert!(compilation.assets.contains_key("globalConfig.js"));
  assert!(compilation.assets["app.html"]
    .source()
    .contains(r#"<script src="globalConfig.js"></script>"#));
}

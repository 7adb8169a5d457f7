pub mod es_target;
pub mod normalized_global_config_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::ESTarget;

/// Raw plugin options. Every field is optional; `normalize` fills in the
/// defaults. The JSON surface is the three camelCase options the plugin has
/// always had; `cwd` and `target` are set programmatically or from the CLI.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobalConfigOptions {
  /// Name of the html template asset to rewrite.
  pub template_html_name: Option<String>,

  /// Property name mounted on the browser global object, and the base name
  /// of the generated `{name}.js` asset.
  pub global_config_name: Option<String>,

  /// Path to the configuration source file, absolute or relative to `cwd`.
  pub global_config_file_path: Option<String>,

  /// Base directory for resolving a relative `global_config_file_path`.
  #[serde(skip)]
  pub cwd: Option<PathBuf>,

  /// ECMAScript target the configuration source is lowered to before it is
  /// evaluated.
  #[serde(skip)]
  pub target: Option<ESTarget>,
}

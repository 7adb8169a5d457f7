use std::path::PathBuf;

use crate::ESTarget;

#[derive(Debug)]
pub struct NormalizedGlobalConfigOptions {
  pub template_html_name: String,
  pub global_config_name: String,
  pub global_config_file_path: String,
  pub cwd: PathBuf,
  pub target: ESTarget,
}

impl NormalizedGlobalConfigOptions {
  /// Filename of the script asset the plugin emits.
  pub fn script_asset_name(&self) -> String {
    format!("{}.js", self.global_config_name)
  }
}

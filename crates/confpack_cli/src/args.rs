use std::path::PathBuf;

use clap::Args;

use confpack::{ESTarget, GlobalConfigOptions};

#[derive(Args)]
pub struct InputArgs {
  /// Directory whose files seed the compilation asset map.
  #[clap(long, short = 'i', default_value = ".")]
  pub input: PathBuf,

  /// Base directory for resolving a relative configuration file path.
  #[clap(long)]
  pub cwd: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Directory the final assets are written to.
  #[clap(long, short = 'd')]
  pub dir: Option<String>,
}

#[derive(Args)]
pub struct PluginArgs {
  /// Name of the html template asset to rewrite.
  #[clap(long)]
  pub template_html_name: Option<String>,

  /// Property name mounted on the browser global object.
  #[clap(long)]
  pub global_config_name: Option<String>,

  /// Path to the configuration source file.
  #[clap(long)]
  pub global_config_file_path: Option<String>,

  /// Parsed through [`ESTarget`]'s `FromStr`, so the flag takes the same
  /// lowercase names the library accepts.
  #[clap(long, default_missing_value = "esnext")]
  pub target: Option<ESTarget>,

  /// Plugin options as a JSON object; explicit flags take precedence.
  #[clap(long)]
  pub options: Option<String>,
}

impl PluginArgs {
  pub fn into_options(self) -> anyhow::Result<GlobalConfigOptions> {
    let mut options: GlobalConfigOptions = match &self.options {
      Some(json) => serde_json::from_str(json)?,
      None => GlobalConfigOptions::default(),
    };

    options.template_html_name = self.template_html_name.or(options.template_html_name);
    options.global_config_name = self.global_config_name.or(options.global_config_name);
    options.global_config_file_path =
      self.global_config_file_path.or(options.global_config_file_path);
    options.target = self.target;

    Ok(options)
  }
}

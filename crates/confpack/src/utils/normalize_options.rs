use confpack_common::{ESTarget, GlobalConfigOptions, NormalizedGlobalConfigOptions};

pub fn normalize_options(raw_options: GlobalConfigOptions) -> NormalizedGlobalConfigOptions {
  NormalizedGlobalConfigOptions {
    template_html_name: raw_options
      .template_html_name
      .unwrap_or_else(|| "index.html".to_string()),
    global_config_name: raw_options
      .global_config_name
      .unwrap_or_else(|| "globalConfig".to_string()),
    global_config_file_path: raw_options
      .global_config_file_path
      .unwrap_or_else(|| "../../globalConfig.ts".to_string()),
    cwd: raw_options
      .cwd
      .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir")),
    target: raw_options.target.unwrap_or(ESTarget::Es2015),
  }
}

#[test]
fn fills_in_the_documented_defaults() {
  let options = normalize_options(GlobalConfigOptions::default());
  assert_eq!(options.template_html_name, "index.html");
  assert_eq!(options.global_config_name, "globalConfig");
  assert_eq!(options.global_config_file_path, "../../globalConfig.ts");
  assert_eq!(options.script_asset_name(), "globalConfig.js");
  assert!(matches!(options.target, ESTarget::Es2015));
}

mod global_config_options;
mod types;

pub use crate::{
  global_config_options::{
    GlobalConfigOptions, es_target::ESTarget,
    normalized_global_config_options::NormalizedGlobalConfigOptions,
  },
  types::{compilation::Compilation, compilation_asset::CompilationAsset},
};

use std::ops::{Deref, DerefMut};

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// The configuration source file could not be read. The message names the
  /// path as the user configured it, not the resolved absolute path.
  pub fn config_file_not_found(path: &str) -> Self {
    anyhow::anyhow!("请检查文件{path}是否存在").into()
  }

  /// The html template asset is absent from the compilation asset map.
  pub fn template_asset_missing(name: &str) -> Self {
    anyhow::anyhow!("请检查文件{name}是否存在").into()
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn named_diagnostics_carry_the_configured_path() {
  let error = BuildError::config_file_not_found("../../globalConfig.ts");
  assert_eq!(error[0].to_string(), "请检查文件../../globalConfig.ts是否存在");

  let error = BuildError::template_asset_missing("index.html");
  assert_eq!(error[0].to_string(), "请检查文件index.html是否存在");
}

use confpack_common::Compilation;
use confpack_error::BuildResult;
#[cfg(test)]
use confpack_plugin::Plugin;
use confpack_plugin::SharedPlugin;

/// The host side of the hook contract: owns the per-build [`Compilation`]
/// and the registered plugins, and drives their hooks over it.
pub struct Compiler {
  pub compilation: Compilation,
  plugins: Vec<SharedPlugin>,
}

impl Compiler {
  pub fn new(plugins: Vec<SharedPlugin>) -> Self {
    Self { compilation: Compilation::new(), plugins }
  }

  /// Awaits every plugin's emit hook once, in registration order. The first
  /// hook that returns an error aborts the run.
  pub async fn emit(&mut self) -> BuildResult<()> {
    for plugin in &self.plugins {
      plugin.emit(&mut self.compilation).await?;
    }
    Ok(())
  }
}

#[cfg(test)]
struct EmitMarker(&'static str);

#[cfg(test)]
#[async_trait::async_trait]
impl Plugin for EmitMarker {
  fn name(&self) -> &'static str {
    self.0
  }

  async fn emit(&self, compilation: &mut Compilation) -> BuildResult<()> {
    compilation.emit_asset(self.0, confpack_common::CompilationAsset::new(self.0));
    Ok(())
  }
}

#[cfg(test)]
#[tokio::test]
async fn runs_emit_hooks_in_registration_order() {
  use std::sync::Arc;

  let plugins: Vec<SharedPlugin> =
    vec![Arc::new(EmitMarker("a.txt")), Arc::new(EmitMarker("b.txt"))];
  let mut compiler = Compiler::new(plugins);
  compiler.emit().await.unwrap();

  let filenames = compiler.compilation.assets.keys().cloned().collect::<Vec<_>>();
  assert_eq!(filenames, ["a.txt", "b.txt"]);
}

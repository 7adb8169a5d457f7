use std::sync::Arc;

use confpack_common::Compilation;
use confpack_error::BuildResult;

/// A compiler extension driven by build hooks.
#[async_trait::async_trait]
pub trait Plugin: Send + Sync {
  fn name(&self) -> &'static str;

  /// Called once per build, after modules are sealed and right before assets
  /// are written out. Implementations may read, add and replace entries in
  /// `compilation.assets`.
  async fn emit(&self, _compilation: &mut Compilation) -> BuildResult<()> {
    Ok(())
  }
}

pub type SharedPlugin = Arc<dyn Plugin>;

use confpack_utils::indexmap::FxIndexMap;

use crate::CompilationAsset;

/// Per-build state handed to emit hooks: the finalized asset map plus a
/// warnings channel drained by the caller once emission finishes.
#[derive(Debug, Default)]
pub struct Compilation {
  /// Finalized assets keyed by filename, in emission order.
  pub assets: FxIndexMap<String, CompilationAsset>,
  pub warnings: Vec<anyhow::Error>,
}

impl Compilation {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts the asset, replacing an existing entry of the same name.
  /// Other entries are left untouched.
  pub fn emit_asset(&mut self, filename: impl Into<String>, asset: CompilationAsset) {
    self.assets.insert(filename.into(), asset);
  }
}

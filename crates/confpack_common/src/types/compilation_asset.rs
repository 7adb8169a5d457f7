/// A named in-memory build output entry. Inputs -> Modules -> Chunks -> Assets;
/// by the emit phase only the finalized assets remain visible to plugins.
#[derive(Debug, Clone)]
pub struct CompilationAsset {
  content: String,
}

impl CompilationAsset {
  pub fn new(content: impl Into<String>) -> Self {
    Self { content: content.into() }
  }

  /// The asset content as text.
  pub fn source(&self) -> &str {
    &self.content
  }

  /// The asset content length in bytes.
  pub fn size(&self) -> usize {
    self.content.len()
  }
}

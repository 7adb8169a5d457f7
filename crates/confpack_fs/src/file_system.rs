use std::io;
use std::path::Path;

/// The filesystem seam of the pipeline. The config loader only ever reads;
/// the write side exists for callers that persist emitted assets to disk.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

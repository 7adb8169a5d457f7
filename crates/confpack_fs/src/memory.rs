use std::io;
use std::io::Write;
use std::path::Path;

use vfs::{MemoryFS, VfsPath};

use crate::FileSystem;

/// An in-memory filesystem for tests. Paths are rooted at the virtual `/`,
/// so a path resolved against any cwd maps onto the same virtual tree.
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl MemoryFileSystem {
  /// Seeds the filesystem with `(path, content)` pairs.
  pub fn new(files: &[(&str, &str)]) -> Self {
    let fs = Self { root: VfsPath::new(MemoryFS::new()) };
    for (path, content) in files {
      fs.write(Path::new(path), content.as_bytes()).expect("failed to seed memory fs");
    }
    fs
  }

  fn vfs_path(&self, path: &Path) -> io::Result<VfsPath> {
    let path = path.to_string_lossy();
    self.root.join(path.trim_start_matches('/')).map_err(into_io_error)
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.vfs_path(path)?.read_to_string().map_err(into_io_error)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    let file = self.vfs_path(path)?;
    file.parent().create_dir_all().map_err(into_io_error)?;
    let mut writer = file.create_file().map_err(into_io_error)?;
    writer.write_all(content)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    self.vfs_path(path)?.create_dir_all().map_err(into_io_error)
  }
}

// The loader keys its missing-file diagnostic off `ErrorKind::NotFound`, so
// the mapping must hold for the virtual tree too.
fn into_io_error(error: vfs::VfsError) -> io::Error {
  match error.kind() {
    vfs::error::VfsErrorKind::FileNotFound => io::Error::new(io::ErrorKind::NotFound, error),
    _ => io::Error::other(error),
  }
}

#[test]
fn missing_files_map_to_not_found() {
  let fs = MemoryFileSystem::new(&[("/app/globalConfig.ts", "export default {}")]);
  assert!(fs.read_to_string(Path::new("/app/globalConfig.ts")).is_ok());

  let error = fs.read_to_string(Path::new("/app/missing.ts")).unwrap_err();
  assert_eq!(error.kind(), io::ErrorKind::NotFound);
}

//! Scratch directories for bootstrapping projects in tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory new projects are created in.
///
/// The process working directory is never changed; callers pass
/// [`WorkspaceGuard::path`] wherever a working directory is expected.
pub struct WorkspaceGuard {
  /// The temporary directory acting as the parent of new projects
  pub temp_dir: TempDir,
}

impl Default for WorkspaceGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl WorkspaceGuard {
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    Self { temp_dir }
  }

  /// Path of the parent directory
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Where a project called `name` would be created
  pub fn project_dir(&self, name: &str) -> PathBuf {
    self.temp_dir.path().join(name)
  }

  /// Create a directory called `name`, as if a project already lived there
  pub fn create_existing_dir(&self, name: &str) -> PathBuf {
    let dir = self.project_dir(name);
    fs::create_dir_all(&dir).expect("Failed to create directory");
    dir
  }
}

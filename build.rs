//! Build script for reposeed
//!
//! Embeds build metadata for the startup debug log

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

/// Exposes the git commit hash and build time as compile-time environment
/// variables. Both are optional; a build outside a git checkout simply omits
/// the hash.
fn embed_build_info() {
  if let Ok(output) = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output()
    && output.status.success()
  {
    let git_hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    println!("cargo:rustc-env=GIT_HASH={git_hash}");
  }

  if let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) {
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", elapsed.as_secs());
  }
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}

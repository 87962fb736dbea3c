//! Test harness for pipeline integration tests.
//!
//! Copies a fixture project into a temp dir and loads its config, so tests
//! can generate, classify and remove components against real files.

use canvaslift_core::{load_lift_config, LiftConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Copy a fixture tree file by file; metadata is not preserved.
fn copy_tree(src: &Path, dst: &Path) {
    fs::create_dir_all(dst).expect("Failed to create dir");
    for entry in fs::read_dir(src).expect("Failed to read fixture dir").flatten() {
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("Failed to copy fixture file");
        }
    }
}

pub struct TestProject {
    pub config: LiftConfig,
    _temp_dir: TempDir,
}

impl TestProject {
    /// Create a project from a named fixture directory.
    pub fn from_fixture(name: &str) -> Self {
        let fixture_src =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
        assert!(fixture_src.exists(), "Fixture '{name}' not found at {}", fixture_src.display());

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        copy_tree(&fixture_src, temp_dir.path());

        TestProject { config: load_lift_config(temp_dir.path()), _temp_dir: temp_dir }
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn read(&self, rel_path: &str) -> String {
        fs::read_to_string(self.root().join(rel_path))
            .unwrap_or_else(|e| panic!("Failed to read {rel_path}: {e}"))
    }

    pub fn write(&self, rel_path: &str, content: &str) {
        let path = self.root().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create dir");
        }
        fs::write(path, content).expect("Failed to write file");
    }
}

//! Test harness for the HTTP service.
//!
//! Copies the core crate's `canvas` fixture into a temp dir, serves it on an
//! ephemeral localhost port, and aborts the server on drop.

use canvaslift_core::load_lift_config;
use canvaslift_server::{router, AppContext};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;
use tokio::task::JoinHandle;

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

pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
    temp_dir: TempDir,
}

impl TestServer {
    pub async fn start() -> Self {
        let fixture_src =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../crates/core/tests/fixtures/canvas");
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        copy_tree(&fixture_src, temp_dir.path());

        let app = router(AppContext::new(load_lift_config(temp_dir.path())));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        TestServer { addr, handle, temp_dir }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn read(&self, rel_path: &str) -> String {
        fs::read_to_string(self.root().join(rel_path))
            .unwrap_or_else(|e| panic!("Failed to read {rel_path}: {e}"))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

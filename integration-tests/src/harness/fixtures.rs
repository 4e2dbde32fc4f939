use anyhow::Context;
use edgecache_core::conf::{AnalyzerConfig, load_config};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn read_fixture(file: &str) -> anyhow::Result<String> {
    let path = fixture_path(file);
    fs::read_to_string(&path).with_context(|| format!("failed to read fixture {}", path.display()))
}

pub fn load_fixture_config(file: &str) -> anyhow::Result<AnalyzerConfig> {
    let path = fixture_path(file);
    load_config(&path).with_context(|| format!("failed to load config {}", path.display()))
}

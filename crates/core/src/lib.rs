//! canvaslift: promote canvas elements into standalone component definitions.
//!
//! This crate holds the extraction-and-codegen pipeline: it finds an element's
//! branch in the hand-authored canvas page, rewrites it into a parameterized
//! definition, and writes it next to the project's other components. Output
//! is best-effort text transformation, not a parse.
//!
//! # Modules
//!
//! - [`locate`] — Branch location in the canvas page's ternary chain
//! - [`transform`] — Ordered rewrite stages (dedent, canvas stripping, props)
//! - [`deps`] — Icon glyph and sub-component import inference
//! - [`assemble`] — Standalone definition assembly
//! - [`templates`] — Curated and stub fallback definitions
//! - [`classify`] — Stub detection and the validator gate
//! - [`generate`] — Extraction and generation orchestration
//! - [`remove`] — Component deletion and usage scrubbing
//! - [`ident`] — Identifier sanitization and naming
//! - [`types`] — Shared types
//! - [`error`] — Error taxonomy

pub mod assemble;
pub mod classify;
pub mod deps;
pub mod error;
pub mod generate;
pub mod ident;
pub mod locate;
pub mod remove;
pub mod templates;
pub mod transform;
pub mod types;

pub use error::{LiftError, LiftResult};
pub use generate::{extract_component, generate_component};
pub use ident::ComponentId;
pub use remove::remove_component;
pub use types::LiftConfig;

use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// .canvaslift.toml config loading
// ---------------------------------------------------------------------------

/// Name of the per-project config file.
pub const CONFIG_FILE: &str = ".canvaslift.toml";

/// Known keys in `.canvaslift.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["canvas_page", "components_dir", "src_dir", "service_url", "port"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_key(key: &str) {
    let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
    match suggestion {
        Some(s) if edit_distance(key, s) <= 3 => {
            warn!(key, suggestion = *s, "Unknown key in {CONFIG_FILE}, did you mean '{s}'?");
        }
        _ => warn!(key, "Unknown key in {CONFIG_FILE} (known keys: {})", KNOWN_CONFIG_KEYS.join(", ")),
    }
}

/// Apply `.canvaslift.toml` text on top of `config`.
pub fn apply_config_str(config: &mut LiftConfig, content: &str) {
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE}");
            return;
        }
    };

    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            warn_unknown_key(key);
        }
    }

    let string = |key: &str| table.get(key).and_then(|v| v.as_str()).map(str::to_string);
    if let Some(v) = string("canvas_page") {
        config.canvas_page = v;
    }
    if let Some(v) = string("components_dir") {
        config.components_dir = v;
    }
    if let Some(v) = string("src_dir") {
        config.src_dir = v;
    }
    if let Some(v) = string("service_url") {
        config.service_url = v;
    }
    if let Some(port) = table.get("port").and_then(|v| v.as_integer()) {
        match u16::try_from(port) {
            Ok(p) => config.port = p,
            Err(_) => warn!(port, "Ignoring out-of-range port in {CONFIG_FILE}"),
        }
    }
}

/// Load project configuration from `.canvaslift.toml` in `project_root`.
///
/// Missing or unparsable files yield defaults; unknown keys trigger a warning
/// with a typo suggestion.
pub fn load_lift_config(project_root: &std::path::Path) -> LiftConfig {
    let mut config = LiftConfig::new(project_root.to_path_buf());
    let config_path = project_root.join(CONFIG_FILE);

    if config_path.exists() {
        debug!("Loading {CONFIG_FILE}");
        match std::fs::read_to_string(&config_path) {
            Ok(content) => apply_config_str(&mut config, &content),
            Err(e) => warn!(path = %config_path.display(), error = %e, "Could not read config"),
        }
    }

    config
}

//! Extraction and generation orchestration.
//!
//! `extract_component` runs locate → transform → infer → assemble against the
//! canvas page. `generate_component` wraps it with the template fallback and
//! the file write, so a caller always gets a definition on disk.

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::assemble::assemble;
use crate::deps::infer_dependencies;
use crate::error::{LiftError, LiftResult};
use crate::ident::ComponentId;
use crate::locate::locate;
use crate::templates::get_fallback;
use crate::transform::transform;
use crate::types::{GenerationManifest, LiftConfig, Origin};

/// Lift the branch for a raw element type id out of the canvas page at
/// `canvas_page`. The id is sanitized first; an empty result is
/// [`LiftError::InvalidIdentifier`].
///
/// The page is read fresh on every call.
pub fn extract_component(raw_id: &str, canvas_page: &Path) -> LiftResult<String> {
    let id = ComponentId::parse(raw_id)?;
    extract_id(&id, canvas_page)
}

fn extract_id(id: &ComponentId, canvas_page: &Path) -> LiftResult<String> {
    if !canvas_page.is_file() {
        return Err(LiftError::DocumentNotFound(canvas_page.to_path_buf()));
    }
    let content = fs::read_to_string(canvas_page)?;
    extract_from_source(id, &content)
}

/// Same as [`extract_component`], over an in-memory document.
pub fn extract_from_source(id: &ComponentId, content: &str) -> LiftResult<String> {
    let type_id = id.as_str();
    let lines: Vec<&str> = content.split('\n').collect();
    let span = locate(&lines, type_id)?;
    debug!(component = type_id, start = span.start_line, end = span.end_line, "Located branch");

    let block = transform(&span.payload(&lines), type_id);
    let deps = infer_dependencies(&block.body);
    Ok(assemble(type_id, &block.body, &block.props, &deps))
}

/// Definition text for `id`: extracted when possible, otherwise a template.
pub fn resolve_source(id: &ComponentId, config: &LiftConfig) -> (String, Origin) {
    match extract_id(id, &config.canvas_page_path()) {
        Ok(source) => (source, Origin::Extracted),
        Err(e) => {
            warn!(component = %id, error = %e, "Extraction failed, using template fallback");
            get_fallback(id)
        }
    }
}

/// Generate `<components_dir>/<id>.tsx` for a raw element type id.
///
/// Concurrent calls for the same id are not coordinated; the last write wins.
pub fn generate_component(config: &LiftConfig, raw_id: &str) -> LiftResult<GenerationManifest> {
    let id = ComponentId::parse(raw_id)?;
    let (source, origin) = resolve_source(&id, config);

    let dir = config.components_path();
    let path = dir.join(id.file_name());
    fs::create_dir_all(&dir)
        .and_then(|_| fs::write(&path, &source))
        .map_err(|e| LiftError::WriteFailure { path: path.clone(), source: e })?;

    info!(component = %id, path = %path.display(), ?origin, "Wrote component");

    Ok(GenerationManifest {
        files: vec![path.display().to_string()],
        component_path: config.component_rel_path(&id.file_name()),
        component_tag: id.tag(),
        origin,
    })
}

//! Component removal: delete a generated definition and scrub its imports
//! and self-closing usages from the project's source tree.

use ignore::WalkBuilder;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::LiftResult;
use crate::ident::ComponentId;
use crate::types::{LiftConfig, RemovalReport};

/// Extensions scanned for imports of the removed component.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

const SKIP_DIRS: &[&str] = &["node_modules"];

/// Collect source files under `dir`, skipping hidden entries and `node_modules`.
pub fn list_source_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                let name = entry.file_name().to_string_lossy();
                return !SKIP_DIRS.iter().any(|d| *d == name);
            }
            true
        })
        .build()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        })
        .collect();
    files.sort();
    files
}

/// Rewrites one file's references to a removed component.
pub struct UsageScrubber {
    import_re: Regex,
    module_pattern: String,
}

impl UsageScrubber {
    pub fn new(id: &ComponentId) -> Self {
        // The module path must end at the id (optionally with an extension or
        // a subpath), so removing `card` leaves `card-2` imports alone.
        let module_pattern = format!(
            r#"['"][^'"]*components[/\\]{}(?:\.[jt]sx?|[/\\][^'"]*)?['"]"#,
            regex::escape(id.as_str())
        );
        let import_re = Regex::new(&format!(r"import\s+(\w+)\s+from\s+{module_pattern};?"))
            .expect("import regex");
        Self { import_re, module_pattern }
    }

    /// Returns the rewritten text when anything changed.
    pub fn scrub(&self, content: &str) -> Option<String> {
        let names: Vec<String> =
            self.import_re.captures_iter(content).map(|c| c[1].to_string()).collect();
        if names.is_empty() {
            return None;
        }

        let mut out = content.to_string();
        for name in &names {
            let name = regex::escape(name);
            let import_line = Regex::new(&format!(
                r"import\s+{name}\s+from\s+{};?[ \t]*\r?\n?",
                self.module_pattern
            ))
            .expect("import line regex");
            out = import_line.replace_all(&out, "").into_owned();

            let self_closing =
                Regex::new(&format!(r"<{name}\s+[^/]*/>|<{name}\s*/>")).expect("usage regex");
            out = self_closing.replace_all(&out, "{null}").into_owned();
        }

        (out != content).then_some(out)
    }
}

/// Delete `<components_dir>/<id>.tsx` (and a legacy `<id>/` folder) and scrub
/// every other source file that imports it.
pub fn remove_component(config: &LiftConfig, raw_id: &str) -> LiftResult<RemovalReport> {
    let id = ComponentId::parse(raw_id)?;
    let component_file = config.components_path().join(id.file_name());
    let component_dir = config.components_path().join(id.as_str());

    let scrubber = UsageScrubber::new(&id);
    let mut updated_files = Vec::new();
    for file in list_source_files(&config.src_path()) {
        if file == component_file || file.starts_with(&component_dir) {
            continue;
        }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        if let Some(rewritten) = scrubber.scrub(&content) {
            fs::write(&file, rewritten)?;
            debug!(path = %file.display(), "Removed component usages");
            updated_files.push(config.relative_display(&file));
        }
    }

    let mut deleted = false;
    if component_file.is_file() {
        fs::remove_file(&component_file)?;
        deleted = true;
    }
    if component_dir.is_dir() {
        fs::remove_dir_all(&component_dir)?;
        deleted = true;
    }

    info!(component = %id, deleted, updated = updated_files.len(), "Removed component");
    Ok(RemovalReport { deleted, updated_files })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrubber(id: &str) -> UsageScrubber {
        UsageScrubber::new(&ComponentId::parse(id).unwrap())
    }

    #[test]
    fn test_scrub_import_and_usage() {
        let content = "import Card from \"@/components/card\";\nimport Other from \"./other\";\n\nexport default function Page() {\n  return <main><Card title=\"x\" /><Card/><Other /></main>;\n}\n";
        let out = scrubber("card").scrub(content).unwrap();
        assert!(!out.contains("@/components/card"));
        assert!(out.contains("import Other from \"./other\";"));
        assert!(out.contains("<main>{null}{null}<Other /></main>"));
    }

    #[test]
    fn test_scrub_keeps_ids_sharing_a_prefix() {
        let content = "import Card2 from '@/components/card-2';\n<Card2 />\n";
        assert!(scrubber("card").scrub(content).is_none());
        assert!(scrubber("card-2").scrub(content).is_some());
    }

    #[test]
    fn test_scrub_matches_extension_and_legacy_folder() {
        let content = "import A from \"../components/hero.tsx\";\nimport B from \"../components/hero/hero\";\n<A /><B />\n";
        let out = scrubber("hero").scrub(content).unwrap();
        assert_eq!(out, "{null}{null}\n");
    }

    #[test]
    fn test_scrub_untouched_file() {
        assert!(scrubber("card").scrub("export const x = 1;\n").is_none());
    }
}

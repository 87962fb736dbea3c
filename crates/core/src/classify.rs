//! Stub detection for generated definitions.
//!
//! A definition only counts as a stub when it has the placeholder shape *and*
//! none of the markers of real UI. Batch mode backs the `lift check` gate.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::error::LiftResult;
use crate::types::{CheckReport, FileVerdict, LiftConfig, Verdict};

/// Attribute every tracked definition carries.
pub const IDENTITY_MARKER: &str = "data-component-id";

/// Placeholder shapes: `return <div ...>bare text</div>;`.
static STUB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?m)return\s*<div\s+data-component-id=["'][^"']+["'][^>]*>\s*[^<]*</div>\s*;?\s*$"#,
        r"(?m)return\s*<div[^>]*>\s*[^<{]*</div>\s*;?\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("stub pattern"))
    .collect()
});

/// Signs of a deliberately minimal but real definition.
static FULL_UI_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"@carbon/icons-react",
        r#"(?m)^\s*import\s+.+\s+from\s+["'][^"']+["']"#,
        r"border-brandcolor|bg-brandcolor|text-brandcolor",
        r"rounded-large|rounded-button|shadow-card",
        r"className=.*\s{2,}",
        r"<(button|nav|header|aside|main)\s",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("full ui indicator"))
    .collect()
});

pub fn is_stub(content: &str) -> bool {
    if !STUB_PATTERNS.iter().any(|re| re.is_match(content)) {
        return false;
    }
    !FULL_UI_INDICATORS.iter().any(|re| re.is_match(content))
}

pub fn classify(content: &str) -> Verdict {
    if !content.contains(IDENTITY_MARKER) {
        Verdict::Skip
    } else if is_stub(content) {
        Verdict::Stub
    } else {
        Verdict::Complete
    }
}

pub fn classify_file(path: &Path) -> LiftResult<Verdict> {
    Ok(classify(&fs::read_to_string(path)?))
}

/// Resolve a validator argument: `.tsx` is appended when missing and
/// relative names resolve inside the components directory.
pub fn resolve_target(config: &LiftConfig, arg: &str) -> PathBuf {
    let file = if arg.ends_with(".tsx") { arg.to_string() } else { format!("{arg}.tsx") };
    let path = Path::new(&file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config.components_path().join(path)
    }
}

/// Classify one file, or every `.tsx` directly inside the components directory.
/// Skipped files are left out of the report.
pub fn check_components(config: &LiftConfig, target: Option<&Path>) -> LiftResult<CheckReport> {
    let dir = config.components_path();
    let files = match target {
        Some(file) => vec![file.to_path_buf()],
        None => {
            if !dir.is_dir() {
                return Ok(CheckReport { checked: Vec::new(), dir_present: false });
            }
            let mut files: Vec<PathBuf> = fs::read_dir(&dir)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "tsx"))
                .collect();
            files.sort();
            files
        }
    };

    let mut checked = Vec::new();
    for file in &files {
        let verdict = classify_file(file)?;
        debug!(path = %file.display(), ?verdict, "Classified");
        if verdict != Verdict::Skip {
            checked.push(FileVerdict { path: config.relative_display(file), verdict });
        }
    }
    Ok(CheckReport { checked, dir_present: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::ComponentId;
    use crate::templates;

    const STUB: &str = "\"use client\";\n\nexport default function Hero() {\n  return <div data-component-id=\"hero\">hero</div>;\n}\n";

    #[test]
    fn test_unmarked_file_is_skipped() {
        assert_eq!(classify("export default function A() { return <p />; }"), Verdict::Skip);
    }

    #[test]
    fn test_placeholder_is_stub() {
        assert_eq!(classify(STUB), Verdict::Stub);
    }

    #[test]
    fn test_template_stub_is_flagged() {
        let id = ComponentId::parse("unknown-widget").unwrap();
        assert_eq!(classify(&templates::stub(&id)), Verdict::Stub);
    }

    #[test]
    fn test_styling_class_makes_placeholder_complete() {
        let content = STUB.replace("data-component-id=\"hero\"", "data-component-id=\"hero\" className=\"rounded-large\"");
        assert_eq!(classify(&content), Verdict::Complete);
    }

    #[test]
    fn test_import_line_makes_placeholder_complete() {
        let content = STUB.replace("\"use client\";\n", "\"use client\";\nimport Logo from \"@/components/logo\";\n");
        assert_eq!(classify(&content), Verdict::Complete);
    }

    #[test]
    fn test_real_markup_is_complete() {
        let content = "export default function Nav() {\n  return (\n    <nav data-component-id=\"nav\">\n      <a href=\"/\">Home</a>\n    </nav>\n  );\n}\n";
        assert_eq!(classify(content), Verdict::Complete);
    }

    #[test]
    fn test_curated_template_is_complete() {
        let id = ComponentId::parse("card-2").unwrap();
        let source = templates::curated(&id).unwrap();
        let marked = source.replace("<div className=\"min-w-64", "<div data-component-id=\"card-2\" className=\"min-w-64");
        assert_eq!(classify(&marked), Verdict::Complete);
    }
}

//! Core types shared across canvaslift: project configuration, block spans,
//! inferred props and dependencies, classifier verdicts, and the manifests
//! returned by generation and removal.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Project configuration, loaded from .canvaslift.toml or defaults
// ---------------------------------------------------------------------------

/// Runtime configuration for one project.
#[derive(Debug, Clone)]
pub struct LiftConfig {
    pub root: PathBuf,
    /// Canvas page holding the element branch chain (relative to root).
    pub canvas_page: String,
    /// Directory that receives generated definitions (relative to root).
    pub components_dir: String,
    /// Source tree scanned when a component is removed (relative to root).
    pub src_dir: String,
    /// Base URL of the standalone generation service.
    pub service_url: String,
    /// Port the generation service listens on.
    pub port: u16,
}

impl LiftConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            canvas_page: "src/pages/CanvasPage.tsx".to_string(),
            components_dir: "src/components".to_string(),
            src_dir: "src".to_string(),
            service_url: "http://127.0.0.1:4202".to_string(),
            port: 4202,
        }
    }

    pub fn canvas_page_path(&self) -> PathBuf {
        self.root.join(&self.canvas_page)
    }

    pub fn components_path(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }

    pub fn src_path(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    /// Project-relative, forward-slashed path of a generated definition.
    pub fn component_rel_path(&self, file_name: &str) -> String {
        let dir = self.components_dir.trim_end_matches('/');
        format!("{dir}/{file_name}")
    }

    /// Path relative to the project root for display, falling back to the full path.
    pub fn relative_display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

// ---------------------------------------------------------------------------
// Extraction types
// ---------------------------------------------------------------------------

/// Line span of one branch in the canvas page. Lines strictly between
/// `start_line` and `end_line` are the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockSpan {
    pub start_line: usize,
    pub end_line: usize,
}

impl BlockSpan {
    /// The payload lines of this span.
    pub fn payload<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        lines[self.start_line + 1..self.end_line].to_vec()
    }
}

/// Markup cannot tell a string prop from a flag, so every prop is widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropType {
    StringOrBoolean,
}

impl PropType {
    pub fn as_ts(self) -> &'static str {
        match self {
            Self::StringOrBoolean => "string | boolean",
        }
    }
}

/// Props discovered by the identifier rewrite, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropsDescriptor {
    entries: Vec<(String, PropType)>,
}

impl PropsDescriptor {
    /// Name reserved for the element's own identity; never a prop.
    pub const RESERVED: &'static str = "id";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prop; duplicates and the reserved name are ignored.
    pub fn insert(&mut self, name: &str) -> bool {
        if name == Self::RESERVED || self.contains(name) {
            return false;
        }
        self.entries.push((name.to_string(), PropType::StringOrBoolean));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PropType)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for PropsDescriptor {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut props = Self::new();
        for name in iter {
            props.insert(name);
        }
        props
    }
}

/// Output of the text transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedBlock {
    pub body: String,
    pub props: PropsDescriptor,
}

/// External symbols a generated definition must import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencySet {
    /// Icon glyphs, in catalog order.
    pub glyphs: Vec<&'static str>,
    pub uses_sub_component: bool,
}

impl DependencySet {
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty() && !self.uses_sub_component
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No identity marker: not a definition canvaslift tracks.
    Skip,
    Stub,
    Complete,
}

/// Verdict for one file, with its project-relative path.
#[derive(Debug, Clone, Serialize)]
pub struct FileVerdict {
    pub path: String,
    pub verdict: Verdict,
}

/// Result of a validator run over the components directory or one file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub checked: Vec<FileVerdict>,
    /// False when the components directory does not exist.
    pub dir_present: bool,
}

impl CheckReport {
    pub fn stubs(&self) -> impl Iterator<Item = &str> {
        self.checked.iter().filter(|f| f.verdict == Verdict::Stub).map(|f| f.path.as_str())
    }

    pub fn has_stubs(&self) -> bool {
        self.stubs().next().is_some()
    }
}

// ---------------------------------------------------------------------------
// Generation and removal manifests
// ---------------------------------------------------------------------------

/// Where a generated definition's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Lifted from the canvas page.
    Extracted,
    /// Hand-written catalog entry.
    Curated,
    /// Placeholder awaiting real markup.
    Stub,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationManifest {
    pub files: Vec<String>,
    pub component_path: String,
    pub component_tag: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReport {
    pub deleted: bool,
    pub updated_files: Vec<String>,
}

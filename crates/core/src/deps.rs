//! Dependency inference for generated definitions.
//!
//! A pure membership test against two small closed sets: icon glyphs from the
//! icon package, and the one reusable sub-component the canvas embeds.

use crate::types::DependencySet;

/// Recognized icon glyphs, in the order they are imported.
pub const GLYPHS: &[&str] = &[
    "Catalog",
    "ArrowLeft",
    "Add",
    "Copy",
    "Share",
    "TrashCan",
    "Document",
    "User",
    "Search",
    "Application",
    "Category",
];

/// Package the glyphs are imported from.
pub const GLYPH_ORIGIN: &str = "@carbon/icons-react";

/// The reusable sub-component and its module.
pub const SUB_COMPONENT: &str = "StackSidebar";
pub const SUB_COMPONENT_ORIGIN: &str = "@/components/stack-sidebar";

/// True when `<name` appears as a tag: followed by whitespace, `/` or `>`.
pub fn uses_tag(body: &str, name: &str) -> bool {
    let needle = format!("<{name}");
    body.match_indices(&needle).any(|(idx, _)| {
        body[idx + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace() || c == '/' || c == '>')
    })
}

pub fn infer_dependencies(body: &str) -> DependencySet {
    DependencySet {
        glyphs: GLYPHS.iter().copied().filter(|g| uses_tag(body, g)).collect(),
        uses_sub_component: uses_tag(body, SUB_COMPONENT),
    }
}

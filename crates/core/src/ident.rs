//! Identifier sanitization and component naming.
//!
//! Every boundary (generation, removal, validator, HTTP) funnels raw ids
//! through [`ComponentId::parse`], so file names and symbols only ever see
//! `[A-Za-z0-9_-]`.

use std::fmt;

use serde::Serialize;

use crate::error::{LiftError, LiftResult};

/// Drop every character outside `[A-Za-z0-9_-]`.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_').collect()
}

/// PascalCase component name: sanitize, split on `-`/`_`, capitalize each
/// segment, lowercase the rest.
pub fn component_name(id: &str) -> String {
    sanitize(id)
        .split(['-', '_'])
        .map(|seg| {
            let mut chars = seg.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// A sanitized, non-empty element type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn parse(raw: &str) -> LiftResult<Self> {
        let safe = sanitize(raw);
        if safe.is_empty() {
            return Err(LiftError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(safe))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol name of the generated definition.
    pub fn component_name(&self) -> String {
        component_name(&self.0)
    }

    /// File name of the generated definition.
    pub fn file_name(&self) -> String {
        format!("{}.tsx", self.0)
    }

    /// Self-closing usage tag reported back to the editor.
    pub fn tag(&self) -> String {
        format!("<{} />", self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_shell_characters() {
        assert_eq!(sanitize("card;rm -rf"), "cardrm-rf");
        assert_eq!(sanitize("../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize("stack_sidebar-2"), "stack_sidebar-2");
    }

    #[test]
    fn test_parse_rejects_empty_result() {
        assert!(matches!(ComponentId::parse(";/ "), Err(LiftError::InvalidIdentifier(_))));
        assert!(matches!(ComponentId::parse(""), Err(LiftError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_component_name() {
        assert_eq!(component_name("card-2"), "Card2");
        assert_eq!(component_name("stack-sidebar"), "StackSidebar");
        assert_eq!(component_name("HERO_banner"), "HeroBanner");
        assert_eq!(component_name("card"), "Card");
        assert_eq!(component_name("card-2;<x>"), "Card2x");
    }

    #[test]
    fn test_file_name_and_tag() {
        let id = ComponentId::parse("card;rm -rf").unwrap();
        assert_eq!(id.as_str(), "cardrm-rf");
        assert_eq!(id.file_name(), "cardrm-rf.tsx");
        assert_eq!(id.tag(), "<cardrm-rf />");
        assert_eq!(id.component_name(), "CardrmRf");
    }
}

//! Rewrite an extracted branch into a standalone component body.
//!
//! Stages run in a fixed order; later patterns assume earlier ones already
//! removed interfering tokens. No stage inserts or deletes lines.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::locate::SCOPE_VAR;
use crate::types::{PropsDescriptor, TransformedBlock};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// A literal rewrite applied to the whole block.
struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self { pattern: Regex::new(pattern).expect("rewrite rule regex"), replacement }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Attributes that only exist for drag and selection on the canvas.
static CANVAS_ATTRIBUTES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::new(r"[ \t]*onMouseDown=\{[^}]+\}", ""),
        RewriteRule::new(r#"[ \t]*role="button""#, ""),
        RewriteRule::new(r"[ \t]*tabIndex=\{0\}", ""),
    ]
});

/// Cursor hints embedded in class strings.
static CANVAS_CLASS_TOKENS: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::new(r"\bcursor-move\b", ""),
        RewriteRule::new(r"\bhover:cursor-grab\b", ""),
        RewriteRule::new(r"\bactive:cursor-grabbing\b", ""),
        RewriteRule::new(r#"className="[ \t]+"#, r#"className=""#),
    ]
});

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("space run regex"));

static SCOPE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{SCOPE_VAR}\.([a-zA-Z_][a-zA-Z0-9_]*)\b")).expect("scope reference regex")
});

/// The collapse toggle calls into canvas-local mutation state.
static KNOWN_CALLBACKS: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![RewriteRule::new(r"onCollapsedChange=\{[^}]+\}", "onCollapsedChange={() => {}}")]
});

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Remove the common leading-whitespace prefix. Blank lines pass through.
pub fn dedent(lines: &[&str]) -> Vec<String> {
    let min = lines.iter().filter(|l| !l.trim().is_empty()).map(|l| indent_width(l)).min();
    match min {
        Some(min) if min > 0 => lines
            .iter()
            .map(|l| {
                if l.trim().is_empty() {
                    return l.to_string();
                }
                l.get(min..).unwrap_or(l).to_string()
            })
            .collect(),
        _ => lines.iter().map(|l| l.to_string()).collect(),
    }
}

/// Collapse space runs after the indentation, keeping the indentation itself.
fn collapse_spaces(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let width = indent_width(line);
            let (indent, rest) = line.split_at(width);
            format!("{indent}{}", SPACE_RUN.replace_all(rest, " "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip drag/selection attributes and cursor classes.
pub fn strip_canvas_affordances(text: &str) -> String {
    let mut s = text.to_string();
    for rule in CANVAS_ATTRIBUTES.iter().chain(CANVAS_CLASS_TOKENS.iter()) {
        s = rule.apply(&s);
    }
    collapse_spaces(&s)
}

/// Rewrite `el.<name>` to `<name>`, recording each name as a prop.
pub fn rewrite_identifiers(text: &str) -> (String, PropsDescriptor) {
    let props: PropsDescriptor =
        SCOPE_REFERENCE.captures_iter(text).filter_map(|c| c.get(1)).map(|m| m.as_str()).collect();
    let body = SCOPE_REFERENCE.replace_all(text, "$1").into_owned();
    (body, props)
}

pub fn normalize_callbacks(text: &str) -> String {
    KNOWN_CALLBACKS.iter().fold(text.to_string(), |s, rule| rule.apply(&s))
}

/// Run every stage over the raw branch payload.
pub fn transform(raw_lines: &[&str], type_id: &str) -> TransformedBlock {
    let block = dedent(raw_lines).join("\n");
    let stripped = strip_canvas_affordances(&block);
    let (rewritten, props) = rewrite_identifiers(&stripped);
    let body = normalize_callbacks(&rewritten);
    debug!(component = type_id, lines = raw_lines.len(), props = props.len(), "Transformed branch");
    TransformedBlock { body, props }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_strips_common_prefix() {
        let out = dedent(&["    <div>", "", "      <p />", "    </div>"]);
        assert_eq!(out, vec!["<div>", "", "  <p />", "</div>"]);
    }

    #[test]
    fn test_dedent_is_idempotent() {
        let input = ["\t\t<a>", "\t\t\t<b />", "  ", "\t\t</a>"];
        let once = dedent(&input);
        let once_refs: Vec<&str> = once.iter().map(String::as_str).collect();
        assert_eq!(dedent(&once_refs), once);
    }

    #[test]
    fn test_dedent_noop_when_flush_or_blank() {
        assert_eq!(dedent(&["<a>", "  <b />"]), vec!["<a>", "  <b />"]);
        assert_eq!(dedent(&["", "   "]), vec!["", "   "]);
    }

    #[test]
    fn test_strip_canvas_affordances() {
        let input = concat!(
            "<div\n",
            "  role=\"button\"\n",
            "  tabIndex={0}\n",
            "  onMouseDown={(e) => handleElementMouseDown(e, el.id)}\n",
            "  className=\"cursor-move w-64  p-4 hover:cursor-grab active:cursor-grabbing\"\n",
            ">"
        );
        let out = strip_canvas_affordances(input);
        assert!(!out.contains("role=\"button\""));
        assert!(!out.contains("tabIndex"));
        assert!(!out.contains("onMouseDown"));
        assert!(!out.contains("cursor-"));
        assert!(out.contains("  className=\"w-64 p-4 \""), "got:\n{out}");
        assert_eq!(out.lines().count(), input.lines().count());
    }

    #[test]
    fn test_space_collapse_keeps_indentation() {
        let input = "<div>\n    <p  className=\"a   b\">x</p>\n        <span />\n</div>";
        let out = strip_canvas_affordances(input);
        assert_eq!(out, "<div>\n    <p className=\"a b\">x</p>\n        <span />\n</div>");
    }

    #[test]
    fn test_removed_attribute_line_becomes_empty() {
        let out = strip_canvas_affordances("<div\n  role=\"button\"\n>");
        assert_eq!(out, "<div\n\n>");
    }

    #[test]
    fn test_rewrite_identifiers_collects_props_in_order() {
        let (body, props) = rewrite_identifiers("{el.title ?? el.label} {el.id} {el.title}");
        assert_eq!(body, "{title ?? label} {id} {title}");
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["title", "label"]);
        assert!(!props.contains("id"));
    }

    #[test]
    fn test_rewrite_ignores_other_receivers() {
        let (body, props) = rewrite_identifiers("{model.title} {panel.label}");
        assert_eq!(body, "{model.title} {panel.label}");
        assert!(props.is_empty());
    }

    #[test]
    fn test_normalize_collapse_callback() {
        let out = normalize_callbacks("onCollapsedChange={(c) => setStackSidebarCollapsed(id, c)}");
        assert_eq!(out, "onCollapsedChange={() => {}}");
    }

    #[test]
    fn test_transform_empty_block() {
        let block = transform(&[], "empty");
        assert_eq!(block.body, "");
        assert!(block.props.is_empty());
    }
}

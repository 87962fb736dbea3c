//! Branch location in the canvas page.
//!
//! The canvas page renders elements through one linear ternary chain:
//!
//! ```text
//! {el.type === "card" ? (
//!   ...
//! ) : el.type === "card-2" ? (
//!   ...
//! ) : (
//!   ...
//! )}
//! ```
//!
//! A single line-oriented pass over that chain stands in for a structural
//! parse. Everything downstream only sees a [`BlockSpan`], so this module can
//! be replaced without touching the transform stages.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{LiftError, LiftResult};
use crate::types::BlockSpan;

/// Name bound to "the current canvas element" in the canvas page.
pub const SCOPE_VAR: &str = "el";

static BRANCH_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"\b{SCOPE_VAR}\.type\s*===\s*["']([^"']+)["']\s*\?\s*\("#))
        .expect("branch start regex")
});

static BRANCH_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*\)\s*:\s*(?:{SCOPE_VAR}\.type\s*===|\()")).expect("branch end regex")
});

fn is_branch_start(line: &str, type_id: &str) -> bool {
    BRANCH_START.captures_iter(line).any(|caps| &caps[1] == type_id)
}

/// Find the branch for `type_id`.
///
/// Nested chains under the same guard are not detected; the first arm
/// closer after the start line always ends the span.
pub fn locate(lines: &[&str], type_id: &str) -> LiftResult<BlockSpan> {
    let not_found = || LiftError::BranchNotFound(type_id.to_string());

    let start_line =
        lines.iter().position(|line| is_branch_start(line, type_id)).ok_or_else(not_found)?;
    let end_line = lines[start_line + 1..]
        .iter()
        .position(|line| BRANCH_END.is_match(line))
        .map(|offset| start_line + 1 + offset)
        .ok_or_else(not_found)?;

    Ok(BlockSpan { start_line, end_line })
}

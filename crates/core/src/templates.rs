//! Fallback definitions used when extraction fails or is skipped.
//!
//! Known types map to a curated, complete definition; anything else gets a
//! placeholder stub that the validator flags until a human replaces it.

use crate::assemble::CLIENT_DIRECTIVE;
use crate::ident::ComponentId;
use crate::types::Origin;

/// Curated definitions keyed by sanitized id.
const CURATED: &[(&str, &str)] = &[("card-2", CARD_2)];

const CARD_2: &str = r#""use client";

import { Catalog } from "@carbon/icons-react";

export interface Card2Props {
  title?: string;
  label?: string;
  description?: string;
}

export default function Card2({
  title,
  label,
  description = "Outline button component for secondary actions.",
}: Card2Props = {}) {
  const heading = title ?? label ?? "Title";
  return (
    <div className="min-w-64 w-full max-w-full h-[323px] rounded-large overflow-hidden bg-brandcolor-white shadow-card flex flex-col">
      <div className="bg-brandcolor-fill px-4 py-3 rounded-b-button shrink-0">
        <div className="flex items-center gap-2">
          <Catalog size={20} className="text-brandcolor-strokestrong shrink-0" aria-hidden />
          <h3 className="text-sm font-semibold text-brandcolor-textstrong">
            {heading}
          </h3>
        </div>
        {description && (
          <p className="mt-1.5 text-xs text-brandcolor-textweak">
            {description}
          </p>
        )}
      </div>
      <div className="flex flex-col flex-1 min-h-0 items-center justify-center p-4">
        <img src="/Button.svg" alt="" className="max-w-full h-auto shrink-0" width={107} height={40} />
      </div>
    </div>
  );
}
"#;

pub fn curated(id: &ComponentId) -> Option<&'static str> {
    CURATED.iter().find(|(key, _)| *key == id.as_str()).map(|(_, source)| *source)
}

/// Placeholder definition: a single marker element carrying the id.
pub fn stub(id: &ComponentId) -> String {
    format!(
        r#"{CLIENT_DIRECTIVE}

// TODO: Replace with the full UI for canvas element type "{id}".
// Copy its markup from the canvas page, then run: lift check {id}
export default function {name}() {{
  return <div data-component-id="{id}">{id}</div>;
}}
"#,
        name = id.component_name(),
    )
}

/// Fallback text for `id`. Never fails.
pub fn get_fallback(id: &ComponentId) -> (String, Origin) {
    match curated(id) {
        Some(source) => (source.to_string(), Origin::Curated),
        None => (stub(id), Origin::Stub),
    }
}

//! Assemble a standalone component definition from a transformed body.

use crate::deps::{GLYPH_ORIGIN, SUB_COMPONENT, SUB_COMPONENT_ORIGIN};
use crate::ident::component_name;
use crate::types::{DependencySet, PropsDescriptor};

/// Directive marking a definition as client-interactive.
pub const CLIENT_DIRECTIVE: &str = "\"use client\";";

/// Extra indent for the body inside `return (...)`.
const BODY_INDENT: &str = "    ";

fn props_interface(name: &str, props: &PropsDescriptor) -> String {
    let mut out = format!("export interface {name}Props {{\n");
    for (prop, ty) in props.iter() {
        out.push_str(&format!("  {prop}?: {};\n", ty.as_ts()));
    }
    out.push_str("}\n\n");
    out
}

fn header(name: &str, props: &PropsDescriptor) -> String {
    let params = if props.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = props.names().collect();
        format!("{{ {} }}: {name}Props = {{}}", names.join(", "))
    };
    format!("export default function {name}({params}) {{\n  return (\n")
}

fn indent_body(body: &str) -> String {
    body.split('\n')
        .map(|line| if line.trim().is_empty() { String::new() } else { format!("{BODY_INDENT}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the definition text. Pure: identical inputs give identical bytes.
pub fn assemble(type_id: &str, body: &str, props: &PropsDescriptor, deps: &DependencySet) -> String {
    let name = component_name(type_id);
    let mut out = String::with_capacity(body.len() + 256);

    out.push_str(CLIENT_DIRECTIVE);
    out.push_str("\n\n");

    if !deps.glyphs.is_empty() {
        out.push_str(&format!("import {{ {} }} from \"{GLYPH_ORIGIN}\";\n\n", deps.glyphs.join(", ")));
    }
    if deps.uses_sub_component {
        out.push_str(&format!("import {SUB_COMPONENT} from \"{SUB_COMPONENT_ORIGIN}\";\n\n"));
    }
    if !props.is_empty() {
        out.push_str(&props_interface(&name, props));
    }

    out.push_str(&header(&name, props));
    out.push_str(&indent_body(body));
    out.push_str("\n  );\n}\n");
    out
}

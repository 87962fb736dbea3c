//! canvaslift CLI: lift canvas elements into components from the terminal.
//!
//! Calls `canvaslift-core` directly with no server overhead.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::exit;

use canvaslift_core::classify::{check_components, resolve_target};
use canvaslift_core::types::CheckReport;
use canvaslift_core::{
    extract_component, generate_component, load_lift_config, remove_component, LiftConfig,
};

/// Extract, generate, validate and delete shared components.
#[derive(Parser)]
#[command(name = "lift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Project root (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the component lifted from the canvas page, without writing it
    Extract {
        /// Element type id (e.g. card-2)
        id: String,

        /// Canvas page to read (default: from .canvaslift.toml)
        #[arg(long)]
        canvas: Option<PathBuf>,
    },
    /// Write a component for an element type, falling back to a template
    Generate {
        /// Element type id
        id: String,
    },
    /// Fail when shared components are still stubs
    Check {
        /// Component name or .tsx file (default: every component)
        component: Option<String>,
    },
    /// Delete a component and remove its imports and usages
    Delete {
        /// Element type id
        id: String,
    },
}

fn resolve_config(root: Option<PathBuf>) -> LiftConfig {
    let root = match root {
        Some(r) => r,
        None => std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("Could not determine current directory: {e}");
            exit(1);
        }),
    };
    let root = root.canonicalize().unwrap_or_else(|e| {
        eprintln!("Path '{}' not found: {e}", root.display());
        exit(1);
    });
    tracing::debug!(root = %root.display(), "Resolved project root");
    load_lift_config(&root)
}

/// Exit code when a named component file does not exist.
const EXIT_MISSING_FILE: i32 = 2;

/// 1 when any checked file is a stub, otherwise 0 (including a missing
/// components directory).
fn check_exit_code(report: &CheckReport) -> i32 {
    if report.has_stubs() {
        1
    } else {
        0
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not serialize output: {e}");
            exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("canvaslift=warn".parse().expect("static directive")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.root);

    match cli.command {
        Commands::Extract { id, canvas } => {
            let page =
                canvas.map(|c| config.root.join(c)).unwrap_or_else(|| config.canvas_page_path());
            let result = extract_component(&id, &page);
            if cli.json {
                let output = match &result {
                    Ok(source) => serde_json::json!({ "success": true, "source": source }),
                    Err(e) => serde_json::json!({ "success": false, "error": e.to_string() }),
                };
                print_json(&output);
            } else {
                match &result {
                    Ok(source) => print!("{source}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
            if result.is_err() {
                exit(1);
            }
        }
        Commands::Generate { id } => match generate_component(&config, &id) {
            Ok(manifest) => {
                if cli.json {
                    print_json(&serde_json::json!({ "success": true, "manifest": manifest }));
                } else {
                    println!("Wrote {} ({:?})", manifest.component_path, manifest.origin);
                    println!("Use it as {}", manifest.component_tag);
                }
            }
            Err(e) => {
                if cli.json {
                    print_json(&serde_json::json!({ "success": false, "error": e.to_string() }));
                } else {
                    eprintln!("{e}");
                }
                exit(1);
            }
        },
        Commands::Check { component } => {
            let target = component.as_deref().map(|c| resolve_target(&config, c));
            if let Some(file) = &target {
                if !file.exists() {
                    eprintln!("File not found: {}", file.display());
                    exit(EXIT_MISSING_FILE);
                }
            }

            let report = check_components(&config, target.as_deref()).unwrap_or_else(|e| {
                eprintln!("Could not check components: {e}");
                exit(1);
            });
            if cli.json {
                print_json(&report);
            } else if !report.dir_present {
                println!("No {} directory.", config.components_dir);
            } else if report.has_stubs() {
                eprintln!("Shared component(s) are stubs. Add the full UI from the canvas page for each type.\n");
                for path in report.stubs() {
                    eprintln!("  - {path}");
                }
                eprintln!("\nRegenerate with `lift generate <id>` once the canvas branch exists.");
            } else {
                println!("Component(s) have full UI.");
            }
            exit(check_exit_code(&report));
        }
        Commands::Delete { id } => match remove_component(&config, &id) {
            Ok(report) => {
                if cli.json {
                    print_json(&serde_json::json!({ "success": true, "deleted": report.deleted, "updatedFiles": report.updated_files }));
                } else {
                    if report.deleted {
                        println!("Deleted {id}");
                    } else {
                        println!("No component file for {id}");
                    }
                    for path in &report.updated_files {
                        println!("  updated {path}");
                    }
                }
            }
            Err(e) => {
                eprintln!("{e}");
                exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvaslift_core::types::{FileVerdict, Verdict};

    fn verdict(path: &str, verdict: Verdict) -> FileVerdict {
        FileVerdict { path: path.to_string(), verdict }
    }

    #[test]
    fn test_check_exit_code_with_stub() {
        let report = CheckReport {
            checked: vec![
                verdict("src/components/badge.tsx", Verdict::Complete),
                verdict("src/components/card.tsx", Verdict::Stub),
            ],
            dir_present: true,
        };
        assert_eq!(check_exit_code(&report), 1);
    }

    #[test]
    fn test_check_exit_code_all_complete() {
        let report = CheckReport {
            checked: vec![verdict("src/components/badge.tsx", Verdict::Complete)],
            dir_present: true,
        };
        assert_eq!(check_exit_code(&report), 0);
    }

    #[test]
    fn test_check_exit_code_missing_directory() {
        let report = CheckReport { checked: Vec::new(), dir_present: false };
        assert_eq!(check_exit_code(&report), 0);
    }
}

//! # Keiro - Flow Graph Validation and Canonical Serialization
//!
//! **Keiro** certifies that editor-built conversational flow graphs are
//! structurally sound before a conversation engine runs them, enumerates
//! every conversation path they admit, and renders them into a canonical,
//! diff-stable text document for version control and hand-off.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a "flow": nodes (questions, actions, messages) joined by labelled
//! edges. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your flow format into your own Rust structs,
//!     or use the bundled [`ui::UiFlow`] model for the editor's JSON shape.
//! 2.  **Convert to Keiro's Model**: Implement the [`flow::IntoFlow`] trait
//!     for your structs to provide a translation layer into Keiro's
//!     [`flow::Flow`].
//! 3.  **Inspect**: Run [`validate::validate`] for the structural report and
//!     [`paths::enumerate_paths`] for every root-to-terminal conversation
//!     path. Structural findings are data in the report, never panics.
//! 4.  **Export**: Render the canonical document with [`export::serialize`],
//!     or pick a render backend explicitly via [`export::serialize_with`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//!     let flow = flow_from_json(&flow_json)?;
//!
//!     // Structural certification: errors block, warnings advise.
//!     let report = validate(&flow);
//!     for warning in &report.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//!     if !report.valid {
//!         for error in &report.errors {
//!             eprintln!("error: {error}");
//!         }
//!         return Ok(());
//!     }
//!
//!     // Every conversation the graph admits, for review or test scripts.
//!     for path in enumerate_paths(&flow) {
//!         let trail: Vec<&str> = path.iter().map(|step| step.node_id.as_str()).collect();
//!         println!("{}", trail.join(" -> "));
//!     }
//!
//!     // Canonical document: byte-stable across declaration order.
//!     let yaml = serialize(&flow);
//!     std::fs::write(export_filename(&flow), yaml)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod export;
pub mod flow;
pub mod graph;
pub mod paths;
pub mod prelude;
pub mod ui;
pub mod validate;

#[cfg(feature = "python-bindings")]
mod python;

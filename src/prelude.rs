//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! keiro crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a flow exported by the editor
//! let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//! let flow = flow_from_json(&flow_json)?;
//!
//! // Inspect it and render the canonical document
//! let report = validate(&flow);
//! println!("valid: {} ({} warnings)", report.valid, report.warnings.len());
//!
//! let yaml = serialize(&flow);
//! std::fs::write(export_filename(&flow), yaml)?;
//! # Ok(())
//! # }
//! ```

// Core operations
pub use crate::paths::{MAX_PATH_DEPTH, PathStep, enumerate_paths};
pub use crate::validate::{FlowInspection, ValidationReport, inspect, validate};

// Canonical flow model and conversion seam
pub use crate::flow::{Flow, FlowEdge, FlowNode, IntoFlow, NodeKind};
pub use crate::graph::GraphIndex;
pub use crate::ui::{UiEdge, UiFlow, UiNode, flow_from_json};

// Export surface
pub use crate::export::{
    ExportBackend, RendererChoice, export_filename, serialize, serialize_with, slugify,
};

// Error types
pub use crate::error::{ExportError, FlowConversionError};

// Open-value re-exports commonly used when building flows by hand
pub use serde_json::{Map, Value};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

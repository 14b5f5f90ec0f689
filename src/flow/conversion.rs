use super::definition::Flow;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a Keiro `Flow`.
///
/// This is the primary extension point for making Keiro format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that lets the validator, path enumerator, and exporter
/// process your custom flow format. The bundled [`UiFlow`](crate::ui::UiFlow)
/// model implements it for the editor's JSON shape.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::prelude::*;
/// use keiro::error::FlowConversionError;
/// use std::result::Result;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, kind: String }
/// struct MyScript { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoFlow` for your top-level struct.
/// impl IntoFlow for MyScript {
///     fn into_flow(self) -> Result<Flow, FlowConversionError> {
///         let mut nodes = Vec::new();
///         for step in self.steps {
///             let kind = NodeKind::parse(&step.kind).ok_or_else(|| {
///                 FlowConversionError::UnknownNodeKind {
///                     node_id: step.id.clone(),
///                     kind: step.kind.clone(),
///                 }
///             })?;
///             nodes.push(FlowNode {
///                 id: step.id,
///                 kind,
///                 label: None,
///                 data: serde_json::Map::new(),
///             });
///         }
///
///         Ok(Flow {
///             id: "my-script".to_string(),
///             name: "My script".to_string(),
///             nodes,
///             edges: vec![], // Convert your transitions here as well
///             metadata: serde_json::Map::new(),
///         })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a Keiro-compatible flow graph.
    fn into_flow(self) -> Result<Flow, FlowConversionError>;
}

use thiserror::Error;

/// Errors that can occur when converting a custom user format into a Keiro `Flow`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownNodeKind { node_id: String, kind: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while rendering a flow into its exported form.
///
/// Structural problems found by validation are never reported here; they are
/// data in the [`ValidationReport`](crate::validate::ValidationReport). This
/// enum only covers failures of the rendering machinery itself.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    #[error("YAML backend failed to render flow '{flow_id}': {message}")]
    RenderFailed { flow_id: String, message: String },
}

use super::ExportBackend;
use super::document::DocValue;
use crate::error::ExportError;
use crate::flow::Flow;

/// Renderer backed by the `serde_yml` emitter.
///
/// Output agrees with [`PlainRenderer`](super::PlainRenderer) in structure
/// and ordering; the dialect differs in whitespace and in quoting where
/// YAML demands it.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRenderer;

impl ExportBackend for YamlRenderer {
    fn render(&self, flow: &Flow, document: &DocValue) -> Result<String, ExportError> {
        serde_yml::to_string(document).map_err(|error| ExportError::RenderFailed {
            flow_id: flow.id.clone(),
            message: error.to_string(),
        })
    }
}

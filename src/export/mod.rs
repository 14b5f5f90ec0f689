use crate::error::ExportError;
use crate::flow::Flow;
use crate::graph::GraphIndex;

mod document;
mod plain;
mod slug;
mod yaml;

pub use document::DocValue;
pub use plain::PlainRenderer;
pub use slug::{export_filename, slugify};
pub use yaml::YamlRenderer;

/// A render backend turning the canonical document tree into text.
///
/// Both bundled backends emit the same structure and ordering from the same
/// tree; only the textual dialect may differ. Implement this trait to target
/// another output format without touching the canonicalization rules.
pub trait ExportBackend {
    /// Renders the prebuilt document for `flow`.
    fn render(&self, flow: &Flow, document: &DocValue) -> Result<String, ExportError>;
}

/// The available render backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererChoice {
    /// Hand-rolled block renderer. Byte-stable, infallible, no dependencies
    /// on a formatting engine. The canonical choice.
    Plain,
    /// `serde_yml`-backed emitter producing mainstream YAML.
    Yaml,
}

/// Renders the canonical text document for a flow.
///
/// The output is deterministic: structurally identical flows yield
/// byte-identical text regardless of node or edge declaration order.
pub fn serialize(flow: &Flow) -> String {
    let index = GraphIndex::build(flow);
    let document = document::build(flow, &index);
    plain::render_document(&document)
}

/// Renders the document for a flow with the chosen backend.
pub fn serialize_with(flow: &Flow, choice: RendererChoice) -> Result<String, ExportError> {
    let index = GraphIndex::build(flow);
    let document = document::build(flow, &index);
    match choice {
        RendererChoice::Plain => PlainRenderer.render(flow, &document),
        RendererChoice::Yaml => YamlRenderer.render(flow, &document),
    }
}

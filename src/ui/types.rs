use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FlowConversionError;
use crate::flow::{Flow, FlowEdge, FlowNode, IntoFlow, NodeKind};

/// Editor node as stored in the flow JSON.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

/// Editor edge as stored in the flow JSON.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "viaLabel", alias = "via_label")]
    pub via_label: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

/// Complete editor flow document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiFlow {
    pub id: String,
    pub name: String,
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl UiFlow {
    /// Parses an editor flow document from JSON text.
    pub fn from_json(json: &str) -> Result<UiFlow, FlowConversionError> {
        serde_json::from_str(json)
            .map_err(|error| FlowConversionError::JsonParseError(error.to_string()))
    }
}

impl IntoFlow for UiFlow {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            let kind =
                NodeKind::parse(&node.kind).ok_or_else(|| FlowConversionError::UnknownNodeKind {
                    node_id: node.id.clone(),
                    kind: node.kind.clone(),
                })?;
            nodes.push(FlowNode {
                id: node.id,
                kind,
                label: node.label,
                data: node.data,
            });
        }

        let edges = self
            .edges
            .into_iter()
            .map(|edge| FlowEdge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                via_label: edge.via_label,
                data: edge.data,
            })
            .collect();

        Ok(Flow {
            id: self.id,
            name: self.name,
            nodes,
            edges,
            metadata: self.metadata,
        })
    }
}

/// Parses editor JSON straight into the canonical flow model.
pub fn flow_from_json(json: &str) -> Result<Flow, FlowConversionError> {
    UiFlow::from_json(json)?.into_flow()
}

use crate::flow::{Flow, FlowEdge, FlowNode, NodeKind};
use crate::graph::GraphIndex;
use itertools::Itertools;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value};

/// An ordered tree of the values a rendered flow document contains.
///
/// Maps keep their entry order; the builder below decides what that order
/// is, so both render backends emit identical structure from the same tree.
/// Open maps coming from node or flow metadata are key-sorted at every
/// depth on the way in.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Seq(Vec<DocValue>),
    Map(Vec<(String, DocValue)>),
}

impl DocValue {
    /// Converts an open JSON value, sorting map keys at every depth.
    pub fn from_value(value: &Value) -> DocValue {
        match value {
            Value::Null => DocValue::Null,
            Value::Bool(flag) => DocValue::Bool(*flag),
            Value::Number(number) => DocValue::Number(number.clone()),
            Value::String(text) => DocValue::Text(text.clone()),
            Value::Array(items) => {
                DocValue::Seq(items.iter().map(DocValue::from_value).collect())
            }
            Value::Object(map) => DocValue::sorted_map(map),
        }
    }

    /// Converts an open map with its keys sorted lexicographically.
    pub fn sorted_map(map: &Map<String, Value>) -> DocValue {
        DocValue::Map(
            map.iter()
                .sorted_by(|a, b| a.0.cmp(b.0))
                .map(|(key, value)| (key.clone(), DocValue::from_value(value)))
                .collect(),
        )
    }
}

impl Serialize for DocValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DocValue::Null => serializer.serialize_unit(),
            DocValue::Bool(flag) => serializer.serialize_bool(*flag),
            DocValue::Number(number) => number.serialize(serializer),
            DocValue::Text(text) => serializer.serialize_str(text),
            DocValue::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            DocValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Builds the canonical document tree for a flow.
///
/// Top level is `id`, `name`, `metadata` (only when non-empty), `flow`.
/// The `flow` map carries one entry per node, ordered by `(kind rank, id)`,
/// each entry projecting the fields of its kind in fixed order.
pub(super) fn build(flow: &Flow, index: &GraphIndex<'_>) -> DocValue {
    let mut nodes: Vec<&FlowNode> = flow.nodes.iter().collect();
    nodes.sort_by(|a, b| {
        (a.kind.rank(), a.id.as_str()).cmp(&(b.kind.rank(), b.id.as_str()))
    });

    let mut flow_map: Vec<(String, DocValue)> = Vec::new();
    for node in nodes {
        let entry = node_entry(node, index.outbound(&node.id));
        insert(&mut flow_map, node.id.clone(), entry);
    }

    let mut document = vec![
        ("id".to_string(), DocValue::Text(flow.id.clone())),
        ("name".to_string(), DocValue::Text(flow.name.clone())),
    ];
    if !flow.metadata.is_empty() {
        document.push(("metadata".to_string(), DocValue::sorted_map(&flow.metadata)));
    }
    document.push(("flow".to_string(), DocValue::Map(flow_map)));
    DocValue::Map(document)
}

fn node_entry(node: &FlowNode, edges: &[&FlowEdge]) -> DocValue {
    match node.kind {
        NodeKind::Question => question_entry(node, edges),
        NodeKind::Action => action_entry(node, edges),
        NodeKind::Message => message_entry(node, edges),
    }
}

fn question_entry(node: &FlowNode, edges: &[&FlowEdge]) -> DocValue {
    let mut entry = entry_for(node);
    if let Some(question) = node.data_value("question") {
        entry.push(("question".to_string(), DocValue::from_value(question)));
    }
    if let Some(check) = node.data_value("check") {
        entry.push(("check".to_string(), DocValue::from_value(check)));
    }
    let answers = node.expected_answer_texts();
    if !answers.is_empty() {
        entry.push((
            "expected_answers".to_string(),
            DocValue::Seq(answers.into_iter().map(DocValue::Text).collect()),
        ));
    }
    if let Some(next) = build_next(edges) {
        entry.push(("next".to_string(), next));
    }
    if let Some(metadata) = node.metadata() {
        entry.push(("metadata".to_string(), DocValue::sorted_map(metadata)));
    }
    DocValue::Map(entry)
}

fn action_entry(node: &FlowNode, edges: &[&FlowEdge]) -> DocValue {
    let mut entry = entry_for(node);
    if let Some(action) = node.data_value("action") {
        entry.push(("action".to_string(), DocValue::from_value(action)));
    }
    if let Some(parameters) = node.parameters() {
        entry.push(("parameters".to_string(), DocValue::sorted_map(parameters)));
    }
    if let Some(next) = build_next(edges) {
        entry.push(("next".to_string(), next));
    }
    if let Some(metadata) = node.metadata() {
        entry.push(("metadata".to_string(), DocValue::sorted_map(metadata)));
    }
    DocValue::Map(entry)
}

// Message entries place metadata ahead of next; the other kinds close with
// metadata. Consumers of the exported text rely on this layout.
fn message_entry(node: &FlowNode, edges: &[&FlowEdge]) -> DocValue {
    let mut entry = entry_for(node);
    if let Some(message) = node.data_value("message") {
        entry.push(("message".to_string(), DocValue::from_value(message)));
    }
    if let Some(severity) = node.data_value("severity") {
        entry.push(("severity".to_string(), DocValue::from_value(severity)));
    }
    if let Some(metadata) = node.metadata() {
        entry.push(("metadata".to_string(), DocValue::sorted_map(metadata)));
    }
    if let Some(next) = build_next(edges) {
        entry.push(("next".to_string(), next));
    }
    DocValue::Map(entry)
}

fn entry_for(node: &FlowNode) -> Vec<(String, DocValue)> {
    vec![(
        "type".to_string(),
        DocValue::Text(node.kind.as_str().to_string()),
    )]
}

/// The `next` field of a node entry. A single unlabelled edge collapses to
/// the bare target id; any other non-empty edge set becomes a map from
/// label (or `default` when absent) to target, in canonical edge order.
fn build_next(edges: &[&FlowEdge]) -> Option<DocValue> {
    if edges.is_empty() {
        return None;
    }
    let has_labels = edges.iter().any(|edge| edge.label().is_some());
    if edges.len() == 1 && !has_labels {
        return Some(DocValue::Text(edges[0].target.clone()));
    }

    let mut ordered = edges.to_vec();
    ordered.sort_by(|a, b| {
        (a.source.as_str(), a.target.as_str(), a.label().unwrap_or(""))
            .cmp(&(b.source.as_str(), b.target.as_str(), b.label().unwrap_or("")))
    });

    let mut next_map: Vec<(String, DocValue)> = Vec::new();
    for edge in ordered {
        insert(
            &mut next_map,
            edge.label().unwrap_or("default").to_string(),
            DocValue::Text(edge.target.clone()),
        );
    }
    Some(DocValue::Map(next_map))
}

/// Map insertion with overwrite: a repeated key keeps its first position
/// and takes the latest value.
fn insert(entries: &mut Vec<(String, DocValue)>, key: String, value: DocValue) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.0 == key) {
        entry.1 = value;
    } else {
        entries.push((key, value));
    }
}

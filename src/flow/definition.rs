use serde_json::{Map, Value};
use std::fmt;

/// The kind of a conversational node. The set is closed: every component in
/// the crate dispatches on it with exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Prompts the user and branches on the answer via labelled edges.
    Question,
    /// Performs a side effect (dispatch, lookup, handoff) and moves on.
    Action,
    /// Presents text to the user. A message with no outgoing edges ends the flow.
    Message,
}

impl NodeKind {
    /// Parses the lowercase wire form (`question`, `action`, `message`).
    pub fn parse(value: &str) -> Option<NodeKind> {
        match value {
            "question" => Some(NodeKind::Question),
            "action" => Some(NodeKind::Action),
            "message" => Some(NodeKind::Message),
            _ => None,
        }
    }

    /// The lowercase wire form of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Question => "question",
            NodeKind::Action => "action",
            NodeKind::Message => "message",
        }
    }

    /// Position of the kind in canonical node ordering: questions first,
    /// then actions, then messages.
    pub fn rank(&self) -> u8 {
        match self {
            NodeKind::Question => 0,
            NodeKind::Action => 1,
            NodeKind::Message => 2,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines a single conversational node in the flow graph.
///
/// Kind-specific fields (`question`, `expectedAnswers`, `action`,
/// `parameters`, `message`, `severity`, ...) live in the open `data` map so
/// that unknown editor fields survive a round trip untouched. The typed
/// accessors project the fields the core cares about.
#[derive(Debug, Clone)]
pub struct FlowNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: Option<String>,
    pub data: Map<String, Value>,
}

impl FlowNode {
    /// Returns the value stored under `key` in the open data map, treating
    /// empty values (empty string, empty collection, zero, `false`, `null`)
    /// as absent.
    pub fn data_value(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|value| is_present(value))
    }

    /// The `expectedAnswers` entries as comparable text, in declaration
    /// order. Labels arrive as strings on the wire while answers may be any
    /// scalar; non-string answers take their JSON text form. Missing or
    /// non-list values yield an empty vec.
    pub fn expected_answer_texts(&self) -> Vec<String> {
        match self.data.get("expectedAnswers") {
            Some(Value::Array(values)) => values
                .iter()
                .map(|value| match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The `parameters` sub-map, if it is a non-empty map.
    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        non_empty_map(self.data.get("parameters"))
    }

    /// The node-level `metadata` sub-map, if it is a non-empty map.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        non_empty_map(self.data.get("metadata"))
    }
}

/// Defines a directed transition between two nodes in the flow graph.
#[derive(Debug, Clone)]
pub struct FlowEdge {
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    pub via_label: Option<String>,
    pub data: Map<String, Value>,
}

impl FlowEdge {
    /// The branch label of the edge. An empty string counts as no label;
    /// every consumer of edge labels goes through this accessor.
    pub fn label(&self) -> Option<&str> {
        self.via_label.as_deref().filter(|label| !label.is_empty())
    }
}

/// The complete, canonical definition of a conversational flow graph.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct Flow {
    pub id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub metadata: Map<String, Value>,
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn non_empty_map<'a>(value: Option<&'a Value>) -> Option<&'a Map<String, Value>> {
    match value {
        Some(Value::Object(map)) if !map.is_empty() => Some(map),
        _ => None,
    }
}

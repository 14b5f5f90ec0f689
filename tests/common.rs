//! Common test utilities for building flow graphs and editor documents.
use keiro::prelude::*;

/// Editor-format document for the sample dispatch flow, as the frontend
/// would POST it. Mirrors `create_sample_flow`.
#[allow(dead_code)]
pub const SAMPLE_FLOW_JSON: &str = r#"{
    "id": "sample-flow",
    "name": "Sample flow",
    "metadata": { "owner": "data-team", "version": 1 },
    "nodes": [
        {
            "id": "start",
            "type": "question",
            "data": {
                "question": "Where to?",
                "expectedAnswers": ["yes", "no"],
                "metadata": { "channel": "inbound" }
            }
        },
        {
            "id": "action",
            "type": "action",
            "data": { "action": "dispatch", "parameters": { "timeout": 30 } }
        },
        {
            "id": "end",
            "type": "message",
            "data": { "message": "Completed", "severity": "info" }
        }
    ],
    "edges": [
        { "id": "e1", "source": "start", "target": "action", "viaLabel": "yes" },
        { "id": "e2", "source": "start", "target": "end", "viaLabel": "no" },
        { "id": "e3", "source": "action", "target": "end" }
    ]
}"#;

/// The canonical text the sample dispatch flow serializes to, byte for byte.
#[allow(dead_code)]
pub const SAMPLE_FLOW_CANONICAL: &str = concat!(
    "id: sample-flow\n",
    "name: Sample flow\n",
    "metadata:\n",
    "  owner: data-team\n",
    "  version: 1\n",
    "flow:\n",
    "  start:\n",
    "    type: question\n",
    "    question: Where to?\n",
    "    expected_answers:\n",
    "      - yes\n",
    "      - no\n",
    "    next:\n",
    "      yes: action\n",
    "      no: end\n",
    "    metadata:\n",
    "      channel: inbound\n",
    "  action:\n",
    "    type: action\n",
    "    action: dispatch\n",
    "    parameters:\n",
    "      timeout: 30\n",
    "    next: end\n",
    "  end:\n",
    "    type: message\n",
    "    message: Completed\n",
    "    severity: info\n",
);

/// Builds a question node with the given prompt and expected answers.
#[allow(dead_code)]
pub fn question(id: &str, prompt: &str, answers: &[&str]) -> FlowNode {
    let mut data = Map::new();
    data.insert("question".to_string(), Value::String(prompt.to_string()));
    data.insert(
        "expectedAnswers".to_string(),
        Value::Array(
            answers
                .iter()
                .map(|answer| Value::String(answer.to_string()))
                .collect(),
        ),
    );
    FlowNode {
        id: id.to_string(),
        kind: NodeKind::Question,
        label: None,
        data,
    }
}

/// Builds an action node carrying only an `action` name.
#[allow(dead_code)]
pub fn action(id: &str, name: &str) -> FlowNode {
    let mut data = Map::new();
    data.insert("action".to_string(), Value::String(name.to_string()));
    FlowNode {
        id: id.to_string(),
        kind: NodeKind::Action,
        label: None,
        data,
    }
}

/// Builds a message node carrying only a `message` text.
#[allow(dead_code)]
pub fn message(id: &str, text: &str) -> FlowNode {
    let mut data = Map::new();
    data.insert("message".to_string(), Value::String(text.to_string()));
    FlowNode {
        id: id.to_string(),
        kind: NodeKind::Message,
        label: None,
        data,
    }
}

/// Adds one entry to a node's open data map.
#[allow(dead_code)]
pub fn with_data(mut node: FlowNode, key: &str, value: Value) -> FlowNode {
    node.data.insert(key.to_string(), value);
    node
}

/// Builds an unlabelled edge.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: None,
        source: source.to_string(),
        target: target.to_string(),
        via_label: None,
        data: Map::new(),
    }
}

/// Builds a labelled edge.
#[allow(dead_code)]
pub fn edge_via(source: &str, target: &str, label: &str) -> FlowEdge {
    FlowEdge {
        via_label: Some(label.to_string()),
        ..edge(source, target)
    }
}

/// Assembles a flow with the id doubling as the name and empty metadata.
#[allow(dead_code)]
pub fn flow(id: &str, nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Flow {
    Flow {
        id: id.to_string(),
        name: id.to_string(),
        nodes,
        edges,
        metadata: Map::new(),
    }
}

/// Creates the sample dispatch flow used by the serialization tests.
///
/// Logic: `start --yes--> action --> end`, `start --no--> end`
#[allow(dead_code)]
pub fn create_sample_flow() -> Flow {
    let start = with_data(
        question("start", "Where to?", &["yes", "no"]),
        "metadata",
        serde_json::json!({ "channel": "inbound" }),
    );
    let dispatch = with_data(
        action("action", "dispatch"),
        "parameters",
        serde_json::json!({ "timeout": 30 }),
    );
    let end = with_data(
        message("end", "Completed"),
        "severity",
        Value::String("info".to_string()),
    );

    let mut metadata = Map::new();
    metadata.insert("owner".to_string(), Value::String("data-team".to_string()));
    metadata.insert("version".to_string(), Value::Number(1.into()));

    Flow {
        id: "sample-flow".to_string(),
        name: "Sample flow".to_string(),
        nodes: vec![start, dispatch, end],
        edges: vec![
            edge_via("start", "action", "yes"),
            edge_via("start", "end", "no"),
            edge("action", "end"),
        ],
        metadata,
    }
}

/// Creates a flow whose only entry point sits on a cycle.
///
/// Logic: `start --yes--> loop --> start`, `start --no--> end`
#[allow(dead_code)]
pub fn create_cyclic_flow() -> Flow {
    flow(
        "cyclic",
        vec![
            question("start", "Try again?", &["yes", "no"]),
            action("loop", "retry"),
            message("end", "Goodbye"),
        ],
        vec![
            edge_via("start", "loop", "yes"),
            edge("loop", "start"),
            edge_via("start", "end", "no"),
        ],
    )
}

/// Creates a flow whose question links out via a label it does not expect.
///
/// Logic: `q1 --maybe--> m1`, with `q1` expecting only yes/no
#[allow(dead_code)]
pub fn create_mislabelled_flow() -> Flow {
    flow(
        "mislabelled",
        vec![
            question("q1", "Proceed?", &["yes", "no"]),
            message("m1", "Done"),
        ],
        vec![edge_via("q1", "m1", "maybe")],
    )
}

/// Creates a flow fanning out from one question into `n` action branches
/// that all rejoin at a single terminal.
///
/// Logic: `start --option-k--> step-k --> terminal` for k in 1..=n
#[allow(dead_code)]
pub fn create_branching_flow(n: usize) -> Flow {
    let answers: Vec<String> = (1..=n).map(|k| format!("option-{}", k)).collect();
    let answer_refs: Vec<&str> = answers.iter().map(String::as_str).collect();

    let mut nodes = vec![question("start", "Which branch?", &answer_refs)];
    let mut edges = Vec::new();
    for k in 1..=n {
        let step = format!("step-{}", k);
        nodes.push(action(&step, "advance"));
        edges.push(edge_via("start", &step, &format!("option-{}", k)));
        edges.push(edge(&step, "terminal"));
    }
    nodes.push(message("terminal", "All done"));

    flow("branching", nodes, edges)
}

/// Creates a straight chain of `length` nodes ending in a terminal message.
///
/// Logic: `n0 --> n1 --> ... --> n{length-1}`
#[allow(dead_code)]
pub fn create_chain_flow(length: usize) -> Flow {
    let mut nodes = Vec::with_capacity(length);
    let mut edges = Vec::with_capacity(length.saturating_sub(1));
    for position in 0..length {
        let id = format!("n{}", position);
        if position + 1 == length {
            nodes.push(message(&id, "Done"));
        } else {
            nodes.push(action(&id, "advance"));
            edges.push(edge(&id, &format!("n{}", position + 1)));
        }
    }
    flow("chain", nodes, edges)
}

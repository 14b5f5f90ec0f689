//! Unit tests for core Keiro types and helpers.
mod common;
use common::*;
use keiro::error::{ExportError, FlowConversionError};
use keiro::prelude::*;

#[test]
fn test_node_kind_parse() {
    assert_eq!(NodeKind::parse("question"), Some(NodeKind::Question));
    assert_eq!(NodeKind::parse("action"), Some(NodeKind::Action));
    assert_eq!(NodeKind::parse("message"), Some(NodeKind::Message));
    assert_eq!(NodeKind::parse("Question"), None);
    assert_eq!(NodeKind::parse("decision"), None);
    assert_eq!(NodeKind::parse(""), None);
}

#[test]
fn test_node_kind_display_roundtrip() {
    for kind in [NodeKind::Question, NodeKind::Action, NodeKind::Message] {
        assert_eq!(NodeKind::parse(&format!("{}", kind)), Some(kind));
    }
}

#[test]
fn test_node_kind_rank_orders_kinds() {
    assert!(NodeKind::Question.rank() < NodeKind::Action.rank());
    assert!(NodeKind::Action.rank() < NodeKind::Message.rank());
}

#[test]
fn test_edge_label_normalization() {
    assert_eq!(edge("a", "b").label(), None);
    assert_eq!(edge_via("a", "b", "").label(), None);
    assert_eq!(edge_via("a", "b", "yes").label(), Some("yes"));
}

#[test]
fn test_data_value_treats_empty_as_absent() {
    let node = with_data(
        with_data(action("a", "go"), "zero", serde_json::json!(0)),
        "off",
        Value::Bool(false),
    );
    let node = with_data(node, "blank", Value::String(String::new()));
    let node = with_data(node, "none", Value::Null);
    let node = with_data(node, "empty_list", serde_json::json!([]));
    let node = with_data(node, "empty_map", serde_json::json!({}));

    for key in ["zero", "off", "blank", "none", "empty_list", "empty_map"] {
        assert_eq!(node.data_value(key), None, "key {} should be absent", key);
    }
    // The action name itself is a non-empty string and stays visible.
    assert_eq!(
        node.data_value("action"),
        Some(&Value::String("go".to_string()))
    );
}

#[test]
fn test_data_value_keeps_meaningful_values() {
    let node = with_data(
        with_data(action("a", "go"), "count", serde_json::json!(2)),
        "flag",
        Value::Bool(true),
    );
    let node = with_data(node, "items", serde_json::json!([1]));

    assert!(node.data_value("count").is_some());
    assert!(node.data_value("flag").is_some());
    assert!(node.data_value("items").is_some());
}

#[test]
fn test_expected_answer_texts_stringify_scalars() {
    let node = with_data(
        question("q", "Pick", &[]),
        "expectedAnswers",
        serde_json::json!(["yes", 30, true]),
    );

    assert_eq!(node.expected_answer_texts(), vec!["yes", "30", "true"]);
}

#[test]
fn test_expected_answer_texts_tolerate_bad_shapes() {
    let scalar = with_data(
        question("q", "Pick", &[]),
        "expectedAnswers",
        Value::String("yes".to_string()),
    );
    assert!(scalar.expected_answer_texts().is_empty());

    let absent = action("a", "go");
    assert!(absent.expected_answer_texts().is_empty());
}

#[test]
fn test_graph_index_roots_and_terminals() {
    let graph = create_sample_flow();
    let index = GraphIndex::build(&graph);

    assert_eq!(index.roots(), vec!["start"]);
    assert_eq!(index.terminals(), vec!["end"]);
    assert_eq!(index.outbound("start").len(), 2);
    assert_eq!(index.inbound("end").len(), 2);
    assert_eq!(index.node_ids(), &["start", "action", "end"]);
    assert_eq!(index.position("action"), Some(1));
}

#[test]
fn test_graph_index_keeps_dangling_edges_visible() {
    let graph = flow(
        "dangling",
        vec![action("a", "go")],
        vec![edge("a", "ghost")],
    );
    let index = GraphIndex::build(&graph);

    assert!(!index.contains("ghost"));
    assert_eq!(index.outbound("a").len(), 1);
    assert_eq!(index.inbound("ghost").len(), 1);
    assert_eq!(index.node_ids(), &["a"]);
}

#[test]
fn test_graph_index_duplicate_id_last_declaration_wins() {
    let graph = flow(
        "dupes",
        vec![action("x", "first"), message("x", "second")],
        vec![],
    );
    let index = GraphIndex::build(&graph);

    assert_eq!(index.node_ids(), &["x"]);
    assert_eq!(
        index.node("x").map(|node| node.kind),
        Some(NodeKind::Message)
    );
}

#[test]
fn test_message_only_terminals() {
    // A question with no outgoing edges is a dead end, not a terminal.
    let graph = flow(
        "dead-end",
        vec![action("a", "go"), question("q", "Stuck?", &[])],
        vec![edge("a", "q")],
    );
    let index = GraphIndex::build(&graph);

    assert!(index.terminals().is_empty());
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Sample Flow!", "flow"), "sample-flow");
    assert_eq!(slugify("  Café   Flow  ", "flow"), "caf-flow");
    assert_eq!(slugify("already-slugged", "flow"), "already-slugged");
    assert_eq!(slugify("!!!", "flow"), "flow");
    assert_eq!(slugify("", "fallback"), "fallback");
    assert_eq!(slugify("A--B", "x"), "a-b");
}

#[test]
fn test_export_filename() {
    assert_eq!(export_filename(&create_sample_flow()), "sample-flow.yaml");

    let unnamed = Flow {
        id: "flow-42".to_string(),
        ..Flow::default()
    };
    assert_eq!(export_filename(&unnamed), "flow-42.yaml");

    assert_eq!(export_filename(&Flow::default()), "flow.yaml");
}

#[test]
fn test_error_display() {
    let conversion = FlowConversionError::UnknownNodeKind {
        node_id: "n7".to_string(),
        kind: "decision".to_string(),
    };
    assert!(conversion.to_string().contains("n7"));
    assert!(conversion.to_string().contains("decision"));

    let parse = FlowConversionError::JsonParseError("unexpected token".to_string());
    assert!(parse.to_string().contains("unexpected token"));

    let render = ExportError::RenderFailed {
        flow_id: "sample-flow".to_string(),
        message: "mapping failure".to_string(),
    };
    assert!(render.to_string().contains("sample-flow"));
    assert!(render.to_string().contains("mapping failure"));
}

use crate::flow::{Flow, NodeKind};
use crate::graph::GraphIndex;
use crate::paths::{PathStep, enumerate_paths};
use ahash::AHashSet;
use itertools::Itertools;
use serde::Serialize;

mod cycle;
mod reach;

use cycle::CycleDetector;
use reach::find_unreachable;

/// The outcome of structural validation.
///
/// Structural problems are data, not `Err`: a flow that fails every rule
/// still produces a report. `valid` is true exactly when `errors` is empty;
/// warnings are advisory and never block validity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// A validation report bundled with the enumerated conversation paths,
/// mirroring what a review surface shows for one flow in one round trip.
#[derive(Debug, Clone, Serialize)]
pub struct FlowInspection {
    #[serde(flatten)]
    pub report: ValidationReport,
    pub paths: Vec<Vec<PathStep>>,
}

/// Runs every structural rule against the flow and collects the findings.
///
/// Rules are evaluated in a fixed order so reports stay stable across runs:
/// node-level identity checks first, then edge endpoint and duplicate
/// checks, then root/terminal shape, per-node kind rules, cycle detection,
/// and reachability last. A flow with no nodes at all short-circuits to a
/// single error.
pub fn validate(flow: &Flow) -> ValidationReport {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if flow.nodes.is_empty() {
        return ValidationReport {
            valid: false,
            errors: vec!["Flow must contain at least one node.".to_string()],
            warnings,
        };
    }

    let duplicates: Vec<&str> = flow
        .nodes
        .iter()
        .map(|node| node.id.as_str())
        .duplicates()
        .sorted()
        .collect();
    if !duplicates.is_empty() {
        errors.push(format!(
            "Duplicate node identifiers detected: {}",
            duplicates.iter().join(", ")
        ));
    }

    let index = GraphIndex::build(flow);

    let mut seen_signatures: AHashSet<(&str, &str, Option<&str>)> = AHashSet::new();
    for edge in &flow.edges {
        if !index.contains(&edge.source) {
            errors.push(format!(
                "Edge references unknown source node '{}'.",
                edge.source
            ));
        }
        if !index.contains(&edge.target) {
            errors.push(format!(
                "Edge references unknown target node '{}'.",
                edge.target
            ));
        }
        let signature = (edge.source.as_str(), edge.target.as_str(), edge.label());
        if !seen_signatures.insert(signature) {
            warnings.push(format!(
                "Duplicate edge detected from '{}' to '{}' with label '{}'.",
                edge.source,
                edge.target,
                edge.label().unwrap_or("")
            ));
        }
    }

    let roots = index.roots();
    if roots.is_empty() {
        errors.push("Flow must contain at least one start node (no incoming edges).".to_string());
    } else if roots.len() > 1 {
        warnings
            .push("Multiple start nodes detected; execution order may be ambiguous.".to_string());
    }

    if index.terminals().is_empty() {
        errors.push(
            "Flow must contain at least one terminal message node (message without outgoing edges)."
                .to_string(),
        );
    }

    for id in index.node_ids() {
        let Some(node) = index.node(id) else {
            continue;
        };
        let outgoing = index.outbound(id);
        match node.kind {
            NodeKind::Message => {
                if !outgoing.is_empty() {
                    warnings.push(format!(
                        "Message node '{id}' has outgoing edges and will not terminate the flow."
                    ));
                }
            }
            NodeKind::Question => {
                let expected: AHashSet<String> =
                    node.expected_answer_texts().into_iter().collect();
                if !expected.is_empty() {
                    for edge in outgoing {
                        if let Some(label) = edge.label() {
                            if !expected.contains(label) {
                                errors.push(format!(
                                    "Edge from question '{id}' uses label '{label}' not present in expected answers."
                                ));
                            }
                        }
                    }
                }
            }
            NodeKind::Action => {}
        }
    }

    if let Some(cycle_path) = CycleDetector::new(&index).first_cycle(&roots) {
        errors.push(format!("Cycle detected: {cycle_path}"));
    }

    let unreachable = find_unreachable(&index, &roots);
    if !unreachable.is_empty() {
        warnings.push(format!(
            "Unreachable nodes detected: {}",
            unreachable.iter().join(", ")
        ));
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Validates the flow and enumerates its conversation paths in one call.
pub fn inspect(flow: &Flow) -> FlowInspection {
    FlowInspection {
        report: validate(flow),
        paths: enumerate_paths(flow),
    }
}

use clap::Parser;
use keiro::prelude::*;
use rand::{Rng, rngs::ThreadRng};
use serde_json::{Map, Value};
use std::fs;

/// A CLI tool to generate synthetic flow documents for the Keiro inspector
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of question nodes to chain together
    #[arg(long, default_value_t = 5)]
    questions: usize,

    /// The minimum number of expected answers per question
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// The maximum number of expected answers per question
    #[arg(long, default_value_t = 4)]
    max: usize,

    /// Wire the closing action back to the first question, producing a cycle
    #[arg(long)]
    cycle: bool,
}

const PROMPTS: [&str; 6] = [
    "Is the account already registered?",
    "Did the reset email arrive?",
    "Is the device connected to the network?",
    "Was the payment confirmed?",
    "Does the error persist after a restart?",
    "Is the subscription still active?",
];

const ACTIONS: [&str; 5] = ["escalate", "dispatch", "notify", "archive", "retry"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min == 0 || cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) must be at least 1 and no greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if cli.questions == 0 {
        eprintln!("Error: --questions must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a synthetic flow ({} question(s), {} to {} answers each)...",
        cli.questions, cli.min, cli.max
    );

    let flow_doc = generate_flow(&mut rng, cli.questions, cli.min, cli.max, cli.cycle);

    // Run the generated document through the inspector before writing it out.
    let report = validate(&flow_doc.clone().into_flow()?);
    if report.valid {
        println!("-> Structural validation passed.");
    } else {
        println!(
            "-> Structural validation reported {} error(s):",
            report.errors.len()
        );
        for error in &report.errors {
            println!("   error: {}", error);
        }
    }

    let json_output = serde_json::to_string_pretty(&flow_doc)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved flow document to '{}'",
        cli.output
    );

    Ok(())
}

/// Builds the full editor document: a chain of questions whose side answers
/// branch through action nodes into a single terminal message.
fn generate_flow(
    rng: &mut ThreadRng,
    questions: usize,
    min_answers: usize,
    max_answers: usize,
    cycle: bool,
) -> UiFlow {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut edge_counter = 0;
    let mut action_count = 0;

    for index in 0..questions {
        let id = format!("q{}", index + 1);
        let answer_count = rng.random_range(min_answers..=max_answers);
        let answers: Vec<String> = (1..=answer_count).map(|n| format!("option-{}", n)).collect();

        nodes.push(question_node(&id, PROMPTS[index % PROMPTS.len()], &answers));

        // The first answer continues the chain; the rest branch off through
        // their own action nodes and rejoin at the terminal.
        let next_in_chain = if index + 1 < questions {
            format!("q{}", index + 2)
        } else {
            "closing".to_string()
        };
        edges.push(labelled_edge(&mut edge_counter, &id, &next_in_chain, &answers[0]));

        for answer in &answers[1..] {
            action_count += 1;
            let action_id = format!("a{}", action_count);
            nodes.push(action_node(
                rng,
                &action_id,
                ACTIONS[(action_count - 1) % ACTIONS.len()],
            ));
            edges.push(labelled_edge(&mut edge_counter, &id, &action_id, answer));
            edges.push(plain_edge(&mut edge_counter, &action_id, "end"));
        }
    }

    nodes.push(action_node(rng, "closing", "archive"));
    edges.push(plain_edge(&mut edge_counter, "closing", "end"));
    nodes.push(message_node("end", "Thanks, the conversation is complete."));

    if cycle {
        edges.push(plain_edge(&mut edge_counter, "closing", "q1"));
        println!("-> Wired 'closing' back to 'q1' to form a cycle.");
    }

    println!(
        "-> Generated {} node(s) and {} edge(s).",
        nodes.len(),
        edges.len()
    );

    let mut metadata = Map::new();
    metadata.insert("generator".to_string(), Value::String("flow-gen".to_string()));

    UiFlow {
        id: "generated-flow".to_string(),
        name: "Generated flow".to_string(),
        nodes,
        edges,
        metadata,
    }
}

fn question_node(id: &str, prompt: &str, answers: &[String]) -> UiNode {
    let mut data = Map::new();
    data.insert("question".to_string(), Value::String(prompt.to_string()));
    data.insert(
        "expectedAnswers".to_string(),
        Value::Array(answers.iter().cloned().map(Value::String).collect()),
    );

    UiNode {
        id: id.to_string(),
        kind: "question".to_string(),
        label: None,
        data,
    }
}

fn action_node(rng: &mut ThreadRng, id: &str, action: &str) -> UiNode {
    let mut parameters = Map::new();
    parameters.insert(
        "timeout".to_string(),
        Value::Number(rng.random_range(5..=120).into()),
    );

    let mut data = Map::new();
    data.insert("action".to_string(), Value::String(action.to_string()));
    data.insert("parameters".to_string(), Value::Object(parameters));

    UiNode {
        id: id.to_string(),
        kind: "action".to_string(),
        label: None,
        data,
    }
}

fn message_node(id: &str, message: &str) -> UiNode {
    let mut data = Map::new();
    data.insert("message".to_string(), Value::String(message.to_string()));
    data.insert("severity".to_string(), Value::String("info".to_string()));

    UiNode {
        id: id.to_string(),
        kind: "message".to_string(),
        label: None,
        data,
    }
}

fn labelled_edge(counter: &mut usize, source: &str, target: &str, label: &str) -> UiEdge {
    *counter += 1;
    UiEdge {
        id: Some(format!("e{}", counter)),
        source: source.to_string(),
        target: target.to_string(),
        via_label: Some(label.to_string()),
        data: Map::new(),
    }
}

fn plain_edge(counter: &mut usize, source: &str, target: &str) -> UiEdge {
    *counter += 1;
    UiEdge {
        id: Some(format!("e{}", counter)),
        source: source.to_string(),
        target: target.to_string(),
        via_label: None,
        data: Map::new(),
    }
}

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use keiro::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RendererCli {
    Plain,
    Yaml,
}

/// A structural validation and canonical export CLI for conversational flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file exported by the editor
    flow_path: Option<String>,

    /// Enumerate and print every root-to-terminal conversation path
    #[arg(short, long)]
    paths: bool,

    /// Render the canonical document to stdout
    #[arg(short, long)]
    export: bool,

    /// Write the canonical document into this directory instead of stdout,
    /// using the suggested export filename
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// The render backend to use for exports
    #[arg(short, long, value_enum)]
    backend: Option<RendererCli>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_inspection(
    flow_path: String,
    show_paths: bool,
    export_to_stdout: bool,
    output_dir: Option<String>,
    choice: RendererChoice,
) {
    let total_start = Instant::now();

    // --- 1. File Loading and Conversion ---
    let load_start = Instant::now();
    let flow_json = fs::read_to_string(&flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", &flow_path, e))
    });
    let flow = flow_from_json(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e)));
    let load_duration = load_start.elapsed();

    println!(
        "Loaded flow '{}' ({} nodes, {} edges)",
        flow.name,
        flow.nodes.len(),
        flow.edges.len()
    );

    // --- 2. Structural Validation ---
    println!("\nValidating flow structure...");
    let validate_start = Instant::now();
    let report = validate(&flow);
    let validate_duration = validate_start.elapsed();

    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
    for error in &report.errors {
        println!("  error: {}", error);
    }
    if report.valid {
        println!("Flow is structurally valid.");
    } else {
        println!(
            "\nFlow is invalid: {} error(s), {} warning(s).",
            report.errors.len(),
            report.warnings.len()
        );
        std::process::exit(1);
    }

    // --- 3. Path Enumeration ---
    let mut paths_duration = None;
    if show_paths {
        println!("\nEnumerating conversation paths...");
        let paths_start = Instant::now();
        let paths = enumerate_paths(&flow);
        paths_duration = Some(paths_start.elapsed());

        for (position, path) in paths.iter().enumerate() {
            println!("  {:>3}: {}", position + 1, format_path(path));
        }
        println!("{} path(s) found.", paths.len());
    }

    // --- 4. Canonical Export ---
    let mut render_duration = None;
    if export_to_stdout || output_dir.is_some() {
        let render_start = Instant::now();
        let document = serialize_with(&flow, choice)
            .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
        render_duration = Some(render_start.elapsed());

        if let Some(dir) = output_dir {
            let target = Path::new(&dir).join(export_filename(&flow));
            fs::write(&target, &document).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", target.display(), e))
            });
            println!("\nCanonical document written to {}", target.display());
        } else {
            println!("\n{}", document);
        }
    }

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:   {:?}", load_duration);
    println!("Validation:     {:?}", validate_duration);
    if let Some(duration) = paths_duration {
        println!("Paths:          {:?}", duration);
    }
    if let Some(duration) = render_duration {
        println!("Export:         {:?} ({:?})", duration, choice);
    }
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

fn format_path(path: &[PathStep]) -> String {
    path.iter()
        .map(|step| match &step.via {
            Some(via) => format!("{}[{}]", step.node_id, via),
            None => step.node_id.clone(),
        })
        .join(" -> ")
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let flow_path = cli
        .flow_path
        .unwrap_or_else(|| exit_with_error("Flow path is required in non-interactive mode."));
    let choice = match cli.backend.unwrap_or(RendererCli::Plain) {
        RendererCli::Plain => RendererChoice::Plain,
        RendererCli::Yaml => RendererChoice::Yaml,
    };

    run_inspection(flow_path, cli.paths, cli.export, cli.output, choice);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Keiro Interactive Mode ---");

    let flow_path = prompt_for_input("Enter flow path", Some("data/flow.json"));

    let show_paths = matches!(
        prompt_for_input("Enumerate conversation paths? (y/n)", Some("y")).as_str(),
        "y" | "Y" | "yes"
    );

    let choice = loop {
        println!("\nPlease select a render backend:");
        println!("  1: Plain (byte-stable canonical text)");
        println!("  2: Yaml (serde_yml dialect)");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break RendererChoice::Plain,
            "2" => break RendererChoice::Yaml,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };

    run_inspection(flow_path, show_paths, true, None, choice);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use triage::config::LogFormat;
use triage::prelude::*;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the symptom tree JSON format and are only used here for conversion.

#[derive(Deserialize)]
struct RawTree {
    #[serde(default = "default_root")]
    root: String,
    nodes: Vec<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    text: String,
    #[serde(default)]
    children: Vec<String>,
    #[serde(default, alias = "isLeaf")]
    is_leaf: bool,
    recommendation: Option<String>,
    severity: Option<String>,
    #[serde(alias = "followUpRequired")]
    follow_up_required: Option<bool>,
}

fn default_root() -> String {
    "root".to_string()
}

// --- Converter Implementation ---

impl IntoGraph for RawTree {
    fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| -> std::result::Result<NodeDefinition, GraphConversionError> {
                if raw.is_leaf && !raw.children.is_empty() {
                    return Err(GraphConversionError::ValidationError(format!(
                        "node '{}' is marked as a leaf but lists children",
                        raw.id
                    )));
                }
                let severity = raw
                    .severity
                    .as_deref()
                    .map(str::parse::<Severity>)
                    .transpose()?;
                Ok(NodeDefinition {
                    id: raw.id,
                    prompt: raw.text,
                    child_ids: raw.children,
                    severity,
                    recommendation: raw.recommendation,
                    follow_up_required: raw.follow_up_required,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(GraphDefinition::new(self.root, nodes))
    }
}

/// Symptom checker: walk the triage decision tree and keep a local history
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a custom symptom tree JSON file (defaults to the built-in tree)
    #[arg(short, long, global = true)]
    tree: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the questions interactively
    Check,
    /// Walk the tree with a fixed list of choices
    Replay {
        /// Node ids to choose, in order
        choices: Vec<String>,
        /// Save the outcome to history
        #[arg(long)]
        save: bool,
        /// Notes to attach to the saved record
        #[arg(long, requires = "save")]
        notes: Option<String>,
    },
    /// Show saved assessments
    History {
        /// Delete all saved assessments
        #[arg(long)]
        clear: bool,
    },
    /// Write the validated tree as a binary artifact
    Export {
        /// Output file path
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = TriageConfig::from_env()
        .unwrap_or_else(|e| exit_with_error(&format!("Configuration error: {}", e)));
    init_logging(&config);

    let store = load_store(cli.tree.as_deref());
    let mut history = JsonFileHistory::new(&config.history.dir, &config.history.namespace);

    match cli.command {
        Command::Check => run_interactive(&store, &config, &mut history),
        Command::Replay {
            choices,
            save,
            notes,
        } => run_replay(&store, &config, &choices, save.then_some(notes), &mut history),
        Command::History { clear } => run_history(&store, &mut history, clear),
        Command::Export { output } => run_export(&store, &output),
    }
}

/// Initialize tracing/logging
fn init_logging(config: &TriageConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}

fn load_store(tree_path: Option<&str>) -> DecisionGraphStore {
    let Some(path) = tree_path else {
        return DecisionGraphStore::builtin()
            .unwrap_or_else(|e| exit_with_error(&format!("Built-in tree is invalid: {}", e)));
    };

    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read tree file '{}': {}", path, e)));
    let raw: RawTree = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse tree JSON: {}", e)));
    let definition = raw
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert tree: {}", e)));

    DecisionGraphStore::builder(definition)
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Tree validation failed: {}", e)))
}

/// Runs the symptom checker as a prompt loop.
fn run_interactive(store: &DecisionGraphStore, config: &TriageConfig, history: &mut JsonFileHistory) {
    println!("--- Symptom Checker ---");
    println!("Answer by number. 'b' goes back, 'r' starts over, 'q' quits.");

    let mut session = TraversalSession::with_policy(store, config.transition_policy);

    while !session.is_complete() {
        let choices = session.choices();
        println!("\n{}", session.current_node().prompt());
        for (i, choice) in choices.iter().enumerate() {
            println!("  {}: {}", i + 1, choice.prompt());
        }

        // End of input ends the session like 'q'
        let Some(input) = prompt_for_input("Your answer", None) else {
            println!();
            return;
        };
        match input.as_str() {
            "q" => return,
            "b" => {
                if !session.retreat() {
                    println!("Already at the first question.");
                }
            }
            "r" => session.reset(),
            other => {
                let selected = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| choices.get(i));
                match selected {
                    Some(node) => {
                        if let Err(e) = session.advance(node.id()) {
                            println!("{}", e);
                        }
                    }
                    None => println!("Please enter a number between 1 and {}.", choices.len()),
                }
            }
        }
    }

    print_outcome(&session);

    let Some(notes) = prompt_for_input("Add notes (optional)", Some("")) else {
        return;
    };
    let Some(save) = prompt_for_input("Save this assessment? [y/n]", Some("y")) else {
        return;
    };
    if save.eq_ignore_ascii_case("y") {
        let notes = (!notes.is_empty()).then_some(notes);
        save_session(&session, notes, history);
    }
}

fn run_replay(
    store: &DecisionGraphStore,
    config: &TriageConfig,
    choices: &[String],
    save: Option<Option<String>>,
    history: &mut JsonFileHistory,
) {
    let session = TraversalSession::replay_with_policy(store, config.transition_policy, choices)
        .unwrap_or_else(|e| exit_with_error(&format!("Replay failed: {}", e)));

    if !session.is_complete() {
        println!("\nAssessment incomplete after {} choice(s).", session.depth());
        println!("Next question: {}", session.current_node().prompt());
        for choice in session.choices() {
            println!("  - {} ({})", choice.prompt(), choice.id());
        }
        if save.is_some() {
            exit_with_error("Only a completed assessment can be saved.");
        }
        return;
    }

    print_outcome(&session);
    if let Some(notes) = save {
        save_session(&session, notes, history);
    }
}

fn run_history(store: &DecisionGraphStore, history: &mut JsonFileHistory, clear: bool) {
    if clear {
        history
            .clear()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to clear history: {}", e)));
        println!("History cleared.");
        return;
    }

    let records = history
        .list_records()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read history: {}", e)));
    let summary = HistorySummary::from_records(&records);

    println!("\n{}", summary.headline());
    for (severity, count) in summary.breakdown() {
        println!("  {:<9} {}", severity.as_str(), count);
    }
    println!("  follow-up {}", summary.follow_ups);

    for record in &records {
        println!("\n{}", PathFormatter::format_record(record));
        println!("{}", PathFormatter::format_prompts(store, record.path()));
        if let Some(notes) = record.notes().filter(|n| !n.is_empty()) {
            println!("Notes: {}", notes);
        }
    }
    println!();
}

fn run_export(store: &DecisionGraphStore, output: &str) {
    GraphArtifact::from_store(store)
        .save(output)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to export tree: {}", e)));
    println!("Wrote {} nodes to '{}'", store.len(), output);
}

fn print_outcome(session: &TraversalSession<'_>) {
    let node = session.current_node();
    println!("\n--- Assessment Result ---");
    println!("{}", node.prompt());
    if let Some(outcome) = session.outcome() {
        println!("Severity:       {}", outcome.severity);
        println!("Recommendation: {}", outcome.recommendation);
        if outcome.follow_up_required {
            println!("Follow up recommended: please consult a healthcare provider about these symptoms.");
        }
    }
    println!("Path: {}", PathFormatter::format_ids(session.path()));
}

fn save_session(session: &TraversalSession<'_>, notes: Option<String>, history: &mut JsonFileHistory) {
    let record = ResultPersistenceBridge::new()
        .save(session, notes)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save assessment: {}", e)));
    let id = record.id().to_string();
    history
        .append_record(record)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write history: {}", e)));
    println!("Assessment saved as {} in '{}'", id, history.path().display());
}

/// A helper function to prompt the user and read a line of input.
///
/// Returns `None` once stdin is exhausted.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> Option<String> {
    let default_prompt = default
        .filter(|d| !d.is_empty())
        .map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    read_answer(&mut io::stdin().lock(), default)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)))
}

/// Reads one trimmed line, substituting `default` for a blank answer.
fn read_answer<R: BufRead>(reader: &mut R, default: Option<&str>) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(Some(default.unwrap_or("").to_string()))
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_answer_stops_at_end_of_input() {
        let mut input = Cursor::new("2\n\n");

        assert_eq!(read_answer(&mut input, None).unwrap(), Some("2".to_string()));
        assert_eq!(read_answer(&mut input, Some("y")).unwrap(), Some("y".to_string()));
        assert_eq!(read_answer(&mut input, Some("y")).unwrap(), None);
    }

    #[test]
    fn read_answer_accepts_last_line_without_newline() {
        let mut input = Cursor::new("  q  ");

        assert_eq!(read_answer(&mut input, None).unwrap(), Some("q".to_string()));
        assert_eq!(read_answer(&mut input, None).unwrap(), None);
    }
}

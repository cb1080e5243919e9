use std::path::Path;

use clap::{Parser, Subcommand};

use lipi_cli::commands::{scheme_ops, search_ops, translit_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Lipi transliteration diagnostics")]
struct Cli {
    /// Custom scheme TOML to use instead of the built-in one
    #[arg(long, global = true)]
    scheme: Option<String>,
    /// Directory for the JSON trace log (needs the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text to Devanagari (reads stdin lines when no text is given)
    Translit {
        /// Roman text; words are joined with single spaces
        text: Vec<String>,
    },
    /// Show how a word is segmented during transliteration
    Explain {
        /// Word to explain
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the search key for text in either script
    Normalize {
        /// Text to normalize
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print lines of a file matching a search term in either script
    Search {
        /// Search term (Roman or Devanagari)
        term: String,
        /// File with one record per line
        file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export or validate phonetic scheme files
    Scheme {
        #[command(subcommand)]
        action: SchemeAction,
    },
}

#[derive(Subcommand)]
enum SchemeAction {
    /// Print the built-in scheme TOML
    Export,
    /// Check a scheme TOML file
    Validate {
        /// Path to the scheme TOML
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.log_dir {
        lipi_engine::init_tracing(Path::new(dir));
    }
    if let Some(ref file) = cli.scheme {
        scheme_ops::load_custom(file);
    }

    match cli.command {
        Command::Translit { text } => translit_ops::translit_cmd(&text),
        Command::Explain { word, json } => translit_ops::explain_cmd(&word, json),
        Command::Normalize { text } => translit_ops::normalize_cmd(&text),
        Command::Search { term, file, json } => search_ops::search_cmd(&term, &file, json),
        Command::Scheme { action } => match action {
            SchemeAction::Export => scheme_ops::scheme_export(),
            SchemeAction::Validate { file } => scheme_ops::scheme_validate(&file),
        },
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use docso_cli::commands::{accuracy_ops, batch_ops, lexicon_ops, read_ops};
use docso_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(
    name = "docso",
    about = "Read non-negative integers aloud in Vietnamese",
    long_about = "Read non-negative integers aloud in Vietnamese.\n\nWithout a subcommand, prompts for one number on stdin."
)]
struct Cli {
    /// Custom lexicon TOML (see `lexicon-export`)
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Directory for docso-trace.jsonl (only with the `trace` feature)
    #[arg(long, global = true, default_value = ".")]
    trace_dir: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read a single number
    Read {
        /// Decimal digits, no sign or separators
        number: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read every number in a file (one per line)
    Batch {
        /// Input file; blank lines and `#` comments are skipped
        input_file: String,
        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Output JSON lines instead of tab-separated text
        #[arg(long)]
        json: bool,
    },
    /// Check readings against a TOML corpus
    Accuracy {
        /// Path to the corpus TOML file
        corpus_file: String,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default lexicon as TOML
    LexiconExport,
    /// Validate a custom lexicon TOML file
    LexiconValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace_guard = init_tracing(&cli.trace_dir);

    if let Some(ref file) = cli.lexicon {
        lexicon_ops::install_lexicon_file(file).unwrap_or_else(|e| {
            eprintln!("Error loading lexicon {file}: {e}");
            std::process::exit(1);
        });
    }

    match cli.command {
        None => read_ops::interactive_cmd(),
        Some(Command::Read { number, json }) => read_ops::read_cmd(&number, json),
        Some(Command::Batch {
            input_file,
            output,
            json,
        }) => batch_ops::batch_cmd(&input_file, output.as_deref(), json),
        Some(Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        }) => accuracy_ops::accuracy_cmd(&corpus_file, category.as_deref(), verbose, json),
        Some(Command::LexiconExport) => lexicon_ops::lexicon_export(),
        Some(Command::LexiconValidate { file }) => lexicon_ops::lexicon_validate(&file),
    }
}

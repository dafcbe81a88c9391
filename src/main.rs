//! CLI entry point and command handlers for fieldbook.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser)]
#[command(name = "fieldbook")]
#[command(version)]
#[command(about = "Sighting-entry validation for bird research fieldwork", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    fieldbook new               Record a sighting interactively\n    fieldbook birds             See which birds the research covers\n\n    Validation rules are fixed by the research project; `fieldbook research`\n    shows the date and quantity bounds entries are checked against."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a sighting entry supplied as flags
    ///
    /// Omitted --quantity or --date flags count as blank fields, exactly as
    /// an empty form field would. Exits non-zero when any field is invalid.
    Validate {
        /// Name of the bird observed (case sensitive)
        #[arg(long)]
        bird: Option<String>,
        /// Number of birds observed
        #[arg(long)]
        quantity: Option<u32>,
        /// Date observed, YYYY-MM-DD or "today"
        #[arg(long)]
        date: Option<String>,
        /// Observed behaviour label, e.g. "singing" (can be specified multiple times)
        #[arg(long = "behaviour", value_name = "LABEL")]
        behaviours: Vec<String>,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Record a sighting interactively and validate it
    New,
    /// List the birds being researched
    Birds {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the observable behaviour labels
    Behaviours {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the research parameters entries are checked against
    Research {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            bird,
            quantity,
            date,
            behaviours,
            json,
        } => cmd::validate::cmd_validate(
            bird.as_deref(),
            quantity,
            date.as_deref(),
            &behaviours,
            json,
        ),
        Commands::New => cmd::new_entry::cmd_new(),
        Commands::Birds { json } => cmd::reference::cmd_birds(json),
        Commands::Behaviours { json } => cmd::reference::cmd_behaviours(json),
        Commands::Research { json } => cmd::reference::cmd_research(json),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fieldbook", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("fieldbook {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

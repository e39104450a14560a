#![forbid(unsafe_code)]
//! PACE Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pace::commands::{
    execute_assess, execute_init, execute_questions, execute_rules, AssessOptions, InitOptions,
    RulesOptions,
};
use pace::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "pace")]
#[command(about = "PACE assessment - personalized learning paths from questionnaire answers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".pace.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a project config
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Generate a personalized learning path from answers
    Assess {
        /// JSON answers file ("-" for stdin)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Answer as question=value (comma-separate multi-select values)
        #[arg(short = 'a', long = "answer")]
        pairs: Vec<String>,

        /// Prompt for unanswered questions
        #[arg(short, long)]
        interactive: bool,

        /// Project rules file
        #[arg(long, env = "PACE_RULES")]
        rules: Option<PathBuf>,

        /// Drop a module from the path (can specify multiple)
        #[arg(long)]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Shorthand for --format json
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// Fail on answers that don't match the question catalog
        #[arg(long)]
        strict: bool,

        /// Write output to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective path rules
    Rules {
        /// Project rules file
        #[arg(long, env = "PACE_RULES")]
        rules: Option<PathBuf>,

        /// Validate a rules file instead of listing
        #[arg(long)]
        check: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List assessment questions and options
    Questions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Markdown,
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Init { force, yes } => {
            let options = InitOptions {
                force,
                yes,
                root: None,
            };
            execute_init(options)?;
        }

        Commands::Assess {
            answers,
            pairs,
            interactive,
            rules,
            exclude,
            format,
            json,
            strict,
            output,
        } => {
            let format = if json {
                Some(OutputFormat::Json)
            } else {
                format.map(OutputFormat::from)
            };
            let options = AssessOptions {
                answers,
                pairs,
                interactive,
                rules,
                exclude,
                format,
                strict,
                output,
            };
            execute_assess(options, &config)?;
        }

        Commands::Rules { rules, check, json } => {
            let options = RulesOptions { rules, check, json };
            execute_rules(options, &config)?;
        }

        Commands::Questions { json } => {
            execute_questions(json)?;
        }
    }

    Ok(())
}

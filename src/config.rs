use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Categorical Naive Bayes: train on a CSV file, then classify rows.
#[derive(Parser, Debug)]
#[command(name = "categorical_bayes", version, about, long_about = None)]
pub struct Cli {
    /// Training data, a CSV file whose last column is the class label
    #[arg(short, long, global = true, default_value = "training.csv")]
    pub train: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the full probability breakdown for one row
    Predict {
        /// Comma separated feature values, optionally followed by the known label
        #[arg(short, long, value_delimiter = ',', required = true)]
        input: Vec<String>,
    },
    /// Classify every row of a labelled test file and report accuracy
    Evaluate {
        /// Labelled test data in the training file's layout
        #[arg(long)]
        test: PathBuf,

        /// Also write per-row predictions to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    Predict { input: Vec<String> },
    Evaluate { test: PathBuf, output: Option<PathBuf> },
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub train: PathBuf,
    pub mode: RunMode,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = match cli.command {
            Command::Predict { input } => RunMode::Predict {
                input: input.into_iter().map(|value| value.trim().to_string()).collect(),
            },
            Command::Evaluate { test, output } => RunMode::Evaluate { test, output },
        };
        Config {
            train: cli.train,
            mode,
        }
    }
}

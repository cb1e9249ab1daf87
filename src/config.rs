//! Command-line and environment configuration.
//!
//! Every setting has a default, so running the binary with no flags starts
//! the interactive session against datasets in the working directory.

use std::path::PathBuf;

use clap::Parser;

use crate::prompt::RetryPolicy;
use crate::report::Renderer;
use crate::session::SessionConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bikeshare trip statistics for Chicago, New York City, and Washington"
)]
pub struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv.
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Give up after this many invalid answers to one question (default: keep asking).
    #[arg(long, env = "BIKESHARE_MAX_ATTEMPTS", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn retry_policy(&self) -> RetryPolicy {
        match self.max_attempts {
            Some(max) => RetryPolicy::Bounded(max),
            None => RetryPolicy::Unlimited,
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            data_dir: self.data_dir.clone(),
            retry: self.retry_policy(),
            renderer: Renderer::for_terminal(),
        }
    }
}

//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for semdom-data
#[derive(Parser, Debug)]
#[command(name = "semdom-data")]
#[command(author, version, about = "Build semantic domain JavaScript data from the Ddp4 XML sources")]
#[command(long_about = r#"
semdom-data reads the semantic domain definitions (Ddp4.xml) and the
per-language question lists (Ddp4Questions-<lang>.xml) and writes two
JavaScript data files per language:

  semanticDomains_<lang>.js          domain name, abbreviation, description
                                     and search keys
  semanticDomainQuestions_<lang>.js  elicitation questions per domain

Values missing in a language are taken from the default language
(search keys excepted). The first error stops the run.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./semdom.toml       Project-level config
3. ~/.config/semdom-data/config.toml   Global config

Example:
  semdom-data
  semdom-data --lang fr --lang zh-CN --output-dir build/semdom
"#)]
pub struct Cli {
    /// Languages to build (can be specified multiple times; defaults to the configured list)
    #[arg(short, long, value_name = "CODE")]
    pub lang: Vec<String>,

    /// Directory holding Ddp4.xml and the question documents
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory to write the generated files to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

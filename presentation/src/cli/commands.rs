//! CLI command definitions

use clap::{Parser, ValueEnum};
use drafter_domain::{CaseSchema, ResultTab};
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text of each view under its title
    #[default]
    Text,
    /// Container markup as rendered
    Html,
    /// JSON object of tab id to text
    Json,
}

/// CLI arguments for legal-drafter
#[derive(Parser, Debug)]
#[command(name = "legal-drafter")]
#[command(author, version, about = "Draft a legal document from case facts")]
#[command(long_about = r#"
Legal Drafter fills the drafting form, submits it to the document generation
endpoint and prints the four result views: the document, the case analysis,
the legal basis and the document review.

Configuration files are loaded from (in priority order):
1. DRAFTER_* environment variables
2. --config <path>     Explicit config file
3. ./drafter.toml      Project-level config
4. ~/.config/legal-drafter/config.toml   Global config

Example:
  legal-drafter --fill-example
  legal-drafter --fill-example -f facts=@fatos.txt --tab document --copy
  legal-drafter --schema short -f tipo_acao=Recurso -f autor="Maria Silva" ...
"#)]
pub struct Cli {
    /// Fill the form with the built-in example case first
    #[arg(short = 'e', long)]
    pub fill_example: bool,

    /// Form variant (long or short field names)
    #[arg(short, long, value_name = "SCHEMA")]
    pub schema: Option<CaseSchema>,

    /// Set a form field; `@path` reads the value from a file (repeatable)
    #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Base URL of the drafting service
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Views to print (default: all four)
    #[arg(short, long, value_name = "TAB")]
    pub tab: Vec<ResultTab>,

    /// Copy the generated document to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
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

impl Cli {
    /// Requested views, all four when none was named
    pub fn tabs(&self) -> Vec<ResultTab> {
        if self.tab.is_empty() {
            ResultTab::ALL.to_vec()
        } else {
            self.tab.clone()
        }
    }
}

/// Parse `key=value`; a value starting with `@` names a file to read
fn parse_field(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{arg}'"));
    }
    let value = match value.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{path}': {e}"))?
            .trim_end()
            .to_string(),
        None => value.to_string(),
    };
    Ok((key.to_string(), value))
}

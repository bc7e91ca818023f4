use clap::Parser;
use pip_chill::application::dto::OutputFormat;
use std::path::PathBuf;

/// Lists installed Python packages that are not dependencies of others
#[derive(Parser, Debug)]
#[command(name = "pip-chill")]
#[command(version)]
#[command(
    about = "Like pip freeze, but lists only the packages that are not dependencies of installed packages",
    long_about = None
)]
pub struct Args {
    /// Omit version numbers
    #[arg(long)]
    pub no_version: bool,

    /// Don't show installations of pip-chill itself
    #[arg(long)]
    pub no_chill: bool,

    /// Show all packages, including pip, setuptools and wheel
    #[arg(short = 'a', long = "all", visible_alias = "show-all")]
    pub show_all: bool,

    /// List commented out dependencies too
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: text or json (defaults to text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// site-packages directory to inspect instead of asking the interpreter
    /// Can be specified multiple times: -p dir-a -p dir-b
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Python interpreter whose environment is listed
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Path to config file (default: auto-discover pip-chill.config.yml in the current directory)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

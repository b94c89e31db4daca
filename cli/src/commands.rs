use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "servdoc")]
#[command(about = "Checks reachability and TCP connectivity of your servers.")]
pub struct CommandLine {
    /// Server list to check
    #[arg(long, default_value = "servers.json")]
    pub file: PathBuf,

    /// Exit immediately instead of waiting for Enter
    #[arg(long)]
    pub no_input: bool,

    /// Only print the report, no diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

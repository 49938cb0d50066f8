use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-services")]
#[command(about = "Calculator and user greeting services with pluggable collaborators")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two integers
    Add {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },
    /// Divide two integers, truncating toward zero
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },
    /// Greet the user with the given id
    Greet { id: i64 },
    /// Create a user
    CreateUser { name: String },
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "library-catalog")]
#[command(about = "A small library catalog manager.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive text menu (default)
    Menu,
    /// Generate customers and books, then print the catalog
    Generate {
        /// Number of customers and books to create
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self { Self::parse() }
}

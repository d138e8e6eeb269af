use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jt")]
#[command(about = "Job application tracker CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse entries, optionally filtered")]
    View {
        #[arg(short, long, help = "Company filter (case-insensitive substring)")]
        company: Option<String>,

        #[arg(
            short,
            long,
            help = "Status filter (exact match; e.g. applied, interview, offer, rejected)"
        )]
        status: Option<String>,

        #[arg(short, long, help = "Date filter (prefix, e.g. 2024-05-01)")]
        date: Option<String>,
    },

    #[command(about = "List all entries")]
    List,

    #[command(about = "Show a single entry")]
    Show {
        #[arg(help = "Entry id")]
        id: i64,
    },

    #[command(about = "Add a new entry")]
    Add {
        #[arg(long, help = "Company name")]
        company: Option<String>,

        #[arg(long, help = "Application status")]
        status: Option<String>,

        #[arg(long = "image-url", help = "Company logo URL")]
        image_url: Option<String>,

        #[arg(long, help = "Note (at least 5 characters)")]
        note: Option<String>,

        #[arg(long, help = "Application date (YYYY-MM-DDTHH:MM)")]
        date: Option<String>,
    },

    #[command(about = "Update an existing entry")]
    Update {
        #[arg(help = "Entry id")]
        id: i64,
    },

    #[command(about = "Remove an entry")]
    Rm {
        #[arg(help = "Entry id")]
        id: i64,
    },

    #[command(about = "Manage entries interactively")]
    Dashboard,

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigCommands>,
    },

    #[command(about = "Generate shell completions")]
    Completion {
        #[arg(help = "Shell (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Set the tracker service base URL")]
    ApiUrl {
        #[arg(help = "Base URL, e.g. http://127.0.0.1:8000")]
        url: String,
    },
}

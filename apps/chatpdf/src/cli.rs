use clap::{ArgAction, Parser, Subcommand};
use pdf_core::ResponderKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page count and the extracted text
    Extract {
        path: PathBuf,
        /// Only print this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Find every line containing the query, with one line of context
    Search {
        path: PathBuf,
        query: String,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a short preview of the document text
    Summary {
        path: PathBuf,
        /// Maximum preview length in characters (overrides the config file)
        #[arg(long)]
        max_len: Option<usize>,
    },
    /// Page through the document and chat about it interactively
    Chat {
        path: PathBuf,
        /// Which simulated responder answers questions: canned or keyword
        #[arg(short, long)]
        responder: Option<ResponderKind>,
    },
}

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use docreview_core::StatusFilter;

#[derive(Debug, Parser)]
#[command(name = "docreview", version, about = "Review AI-extracted contract attributes")]
pub struct Cli {
    /// JSON dataset to read instead of the built-in sample documents.
    #[arg(long, env = "DOCREVIEW_DATA", global = true)]
    pub data: Option<PathBuf>,

    #[arg(long, env = "DOCREVIEW_EMAIL", global = true)]
    pub email: Option<String>,

    #[arg(long, env = "DOCREVIEW_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List documents with summary counts.
    List {
        /// Case-insensitive title search.
        #[arg(short, long, default_value = "")]
        query: String,

        /// all, pending, reviewed, or approved.
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
    },

    /// Review the extracted attributes of one document.
    Review {
        /// Document id.
        id: String,

        /// Case-insensitive attribute name/section search.
        #[arg(long, default_value = "")]
        search: String,

        /// Attribute id to show in the document panel.
        #[arg(long)]
        focus: Option<String>,

        /// Correction as ATTRIBUTE_ID=VALUE. Repeatable.
        #[arg(long = "correct", value_name = "ATTR=VALUE", value_parser = parse_correction)]
        corrections: Vec<(String, String)>,

        /// Accept all extracted values.
        #[arg(long)]
        accept_all: bool,

        /// Save the review.
        #[arg(long)]
        save: bool,
    },

    /// Check the credentials and print the signed-in identity.
    Whoami,
}

fn parse_correction(s: &str) -> Result<(String, String), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ATTR=VALUE, got `{s}`"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing attribute id in `{s}`"));
    }
    Ok((id.to_string(), value.to_string()))
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// yled: scoped CSS for host widgets.
#[derive(Parser, Debug)]
#[command(name = "yled", version, about)]
pub struct Args {
    /// Style table override (JSON file).
    #[arg(long, global = true)]
    pub styles: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the styling kwargs of one widget into a `<style>` block.
    Compile {
        element: String,

        /// Widget kwargs as a JSON object.
        #[arg(long, default_value = "{}")]
        kwargs: String,

        /// Scope key; generated when absent.
        #[arg(long)]
        key: Option<String>,

        /// Fail on invalid values instead of dropping them.
        #[arg(long)]
        strict: bool,

        /// Emit unscoped rules, one block per property.
        #[arg(long)]
        global: bool,
    },

    /// Style one property of every widget of an element type.
    Set {
        element: String,
        property: String,
        value: String,
    },

    /// Check styling kwargs without compiling them.
    Validate {
        element: String,

        #[arg(long, default_value = "{}")]
        kwargs: String,

        #[arg(long)]
        strict: bool,
    },

    /// List element types, or the styling properties of one element.
    Elements { element: Option<String> },
}

pub fn parse() -> Args {
    Args::parse()
}

use crate::input::InputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tableify
/// Render CSV or JSON records as aligned, fixed-width text
#[derive(Parser)]
#[command(
    name = "tableify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render CSV or JSON records as an aligned, fixed-width text table",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a CSV or JSON document as a table
    Render {
        /// Input file ("-" or omitted reads standard input)
        file: Option<String>,

        #[arg(long, short = 'i', value_enum, help = "Input format (default from config)")]
        input: Option<InputFormat>,

        #[arg(long, help = "Spaces between columns")]
        margin: Option<usize>,

        #[arg(long = "no-split-line", help = "Do not print the dash line under the header")]
        no_split_line: bool,

        #[arg(long = "empty-text", help = "Text printed when there are no rows")]
        empty_text: Option<String>,

        #[arg(
            long,
            value_name = "LIST",
            help = "Comma separated minimum widths, one per column"
        )]
        widths: Option<String>,

        #[arg(
            long,
            value_name = "LIST",
            help = "Comma separated printf-style formats, one per column (empty keeps the default)"
        )]
        formats: Option<String>,

        #[arg(
            long,
            short = 'c',
            value_name = "LIST",
            help = "Comma separated column names (JSON: keys to show, CSV: header override)"
        )]
        columns: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,
    },
}

//! Command-line interface for sourcefold.
//!
//! This binary provides access to the sourcefold library functionality,
//! describing a directory tree or assembling a filtered markdown document
//! from it.

use clap::{Parser, ValueEnum};
use sourcefold::{FilterSpec, FilterSpecBuilder, MediaTypeClassifier, assemble, describe};
use std::path::PathBuf;
use std::process::exit;

/// sourcefold — fold filtered source trees into one document
#[derive(Parser)]
#[command(name = "sourcefold", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Extensions to include (comma-separated, no leading dot)
    #[arg(long = "include-ext", value_delimiter = ',')]
    include_extensions: Vec<String>,

    /// Extensions to exclude
    #[arg(long = "exclude-ext", value_delimiter = ',')]
    exclude_extensions: Vec<String>,

    /// Exact file names to include
    #[arg(long = "include-file", value_delimiter = ',')]
    include_files: Vec<String>,

    /// Exact file names to exclude
    #[arg(long = "exclude-file", value_delimiter = ',')]
    exclude_files: Vec<String>,

    /// Root-relative folders to include ("." is the root itself)
    #[arg(long = "include-folder", value_delimiter = ',')]
    include_folders: Vec<String>,

    /// Root-relative folders to exclude
    #[arg(long = "exclude-folder", value_delimiter = ',')]
    exclude_folders: Vec<String>,

    /// Pattern that must match within the relative path
    #[arg(long)]
    include_regex: Option<String>,

    /// Pattern that must not match within the relative path
    #[arg(long)]
    exclude_regex: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The assembled document
    Markdown,
    /// The assembled document's blocks as JSON
    Json,
    /// The described tree as JSON
    Tree,
}

impl Cli {
    fn filter_spec(&self) -> FilterSpec {
        let mut builder = FilterSpecBuilder::new()
            .include_extensions(self.include_extensions.clone())
            .exclude_extensions(self.exclude_extensions.clone())
            .include_files(self.include_files.clone())
            .exclude_files(self.exclude_files.clone())
            .include_folders(self.include_folders.clone())
            .exclude_folders(self.exclude_folders.clone());
        if let Some(ref pattern) = self.include_regex {
            builder = builder.include_regex(pattern.clone());
        }
        if let Some(ref pattern) = self.exclude_regex {
            builder = builder.exclude_regex(pattern.clone());
        }
        builder.build()
    }
}

fn init_tracing(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rendered = match cli.format {
        OutputFormat::Tree => {
            let tree = describe(&cli.root, &MediaTypeClassifier::new()).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                exit(1);
            });
            to_json(&tree, cli.pretty)
        }
        OutputFormat::Json | OutputFormat::Markdown => {
            let spec = cli.filter_spec();
            let document = assemble(&cli.root, &spec).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                exit(1);
            });
            match cli.format {
                OutputFormat::Json => to_json(&document, cli.pretty),
                _ => document.render(),
            }
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &rendered) {
                eprintln!("Error writing {}: {}", path.display(), e);
                exit(1);
            }
        }
        None => println!("{}", rendered),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    })
}

//! Command-line interface for inspecting SVG renderer trees.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::error::Result;
use crate::factory::RendererFactory;
use crate::processor::{RendererTree, TreeProcessor};
use crate::renderer::RendererId;

/// inktree - Inspect the renderer tree an SVG document dispatches to.
#[derive(Parser)]
#[command(name = "inktree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an SVG file and report its renderer tree.
    Inspect {
        /// Path to the SVG file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Skip elements without a renderer instead of aborting
        #[arg(long)]
        lenient: bool,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Indented tree with one renderer per line.
    Text,
    /// YAML rendering of the tree summary.
    Yaml,
    /// JSON rendering of the tree summary.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Yaml => "yaml",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            file,
            format,
            lenient,
        } => inspect_command(&file, format, lenient),
    }
}

/// Execute the inspect command.
fn inspect_command(file: &Path, format: Format, lenient: bool) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let mut processor = TreeProcessor::new(RendererFactory::new());
    if lenient {
        processor = processor.lenient();
    }
    let tree = processor.process(&doc)?;

    match format {
        Format::Text => print_text(&tree),
        Format::Yaml => print!("{}", serde_yaml_ng::to_string(&tree.summary())?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&tree.summary())?),
    }

    Ok(())
}

fn print_text(tree: &RendererTree) {
    match tree.root() {
        Some(root) => print_node(tree, root, 0),
        None => println!("{}", style("(no renderable elements)").dim()),
    }
}

fn print_node(tree: &RendererTree, id: RendererId, depth: usize) {
    if let Some(renderer) = tree.renderer(id) {
        println!(
            "{}{} {}",
            "  ".repeat(depth),
            style(format!("<{}>", renderer.tag_name())).cyan(),
            style(renderer.kind()).dim(),
        );
        for &child in tree.children(id) {
            print_node(tree, child, depth + 1);
        }
    }
}

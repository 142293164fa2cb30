use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use notion_obsidian::{convert_export, ExportedKind, HeaderRules, Transformer};

#[derive(Parser)]
#[command(name = "notion-obsidian", about = "Converts Notion notes to Obsidian", version)]
struct Cli {
    /// Path to the Notion notes
    #[arg(short, long, default_value = "./input/")]
    source: PathBuf,

    /// Path to the Obsidian vault
    #[arg(short, long, default_value = "./output/")]
    destination: PathBuf,

    /// TOML file with header keyword rules (default: Italian export keywords)
    #[arg(short, long)]
    keywords: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.source.is_dir() {
        bail!("Source {:?} is not a directory", cli.source);
    }

    let rules = match &cli.keywords {
        Some(path) => HeaderRules::load(path)
            .with_context(|| format!("Failed to load keyword rules from {:?}", path))?,
        None => HeaderRules::default(),
    };
    let transformer = Transformer::new(&rules).context("Failed to build transformer")?;

    convert_export(&cli.source, &cli.destination, &transformer, |file| match file.kind {
        ExportedKind::Page => println!("[i] writing {}", file.name),
        ExportedKind::Asset => println!("[i] copying {}", file.name),
    })
    .with_context(|| format!("Failed to convert {:?}", cli.source))?;

    Ok(())
}

//! Content Type Generator CLI
//!
//! Renders the TypeScript declarations module for a schema snapshot, or checks
//! that the module on disk is still in sync with the schema.
//!
//! Usage:
//!   content-typegen generate --schema .contentlayer/schema.json --source-plugin local
//!   content-typegen check --schema .contentlayer/schema.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use content_typegen::{
    check_output, render_module, write_output, OutputStatus, SchemaDef, SourcePluginType,
    TypegenConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "content-typegen")]
#[command(about = "Generate TypeScript declarations from a content schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the declarations module and write it to disk
    Generate(RenderArgs),
    /// Compare the declarations module on disk with a fresh render
    Check(RenderArgs),
}

#[derive(Args, Clone)]
struct RenderArgs {
    /// Schema snapshot (JSON); falls back to `schema.path` from the config
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Declarations file; falls back to `output.path` from the config
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Config file layered over the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source adapter id (local, contentful, sanity); overrides the config
    #[arg(long)]
    source_plugin: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns false when `check` finds drift
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Generate(args) => {
            let (code, out) = render(&args)?;
            write_output(&out, &code)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("✅ Wrote {}", out.display());
            Ok(true)
        }
        Command::Check(args) => {
            let (code, out) = render(&args)?;
            let status = check_output(&out, &code)
                .with_context(|| format!("failed to read {}", out.display()))?;
            match status {
                OutputStatus::UpToDate => {
                    println!("✅ {} is up to date", out.display());
                    Ok(true)
                }
                OutputStatus::OutOfDate { diff } => {
                    println!("--- {} (on disk)", out.display());
                    println!("+++ {} (generated)", out.display());
                    print!("{}", diff);
                    eprintln!("\n⚠️  {} is out of date - run `content-typegen generate`", out.display());
                    Ok(false)
                }
            }
        }
    }
}

/// Load config and schema, render, and resolve the output path
fn render(args: &RenderArgs) -> Result<(String, PathBuf)> {
    let mut config = TypegenConfig::load_from(args.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(ref id) = args.source_plugin {
        config.generation.source_plugin_type = SourcePluginType::from_id(id);
        if config.generation.source_plugin_type == SourcePluginType::Unknown {
            tracing::warn!(source_plugin = %id, "unrecognized source plugin, raw payloads render as open maps");
        }
    }

    let schema_path = args
        .schema
        .clone()
        .or_else(|| config.schema.path.clone())
        .context("no schema given: pass --schema or set schema.path in the config")?;

    let schema = SchemaDef::from_path(&schema_path)
        .with_context(|| format!("failed to load schema from {}", schema_path.display()))?;
    tracing::info!(
        path = %schema_path.display(),
        document_types = schema.document_type_def_map.len(),
        nested_types = schema.nested_type_def_map.len(),
        "loaded schema"
    );

    let code = render_module(&schema, &config.generation)?;
    let out = args.out.clone().unwrap_or(config.output.path);
    Ok((code, out))
}

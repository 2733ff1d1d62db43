//! confgen CLI - fastfetch configuration generator
//!
//! Usage: confgen [OPTIONS]
//!
//! Probes fastfetch for modules that produce usable output on this
//! machine, then writes a pruned, tree-decorated config.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use confgen::{
    default_config_path, default_forest, disqualified_kinds, run_probe, write_config,
    ConfigDocument, ProbeEntry,
};

/// confgen - hardware-aware fastfetch config generator
#[derive(Parser, Debug)]
#[command(name = "confgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v lists per-module probe outcomes)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write the config here instead of the fastfetch default path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// fastfetch binary used for probing
    #[arg(long, default_value = "fastfetch")]
    fastfetch: PathBuf,

    /// Print the generated config to stdout without writing
    #[arg(long)]
    dry_run: bool,

    /// Emit the full catalog without probing this machine
    #[arg(long)]
    skip_probe: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmd_generate(&cli)
}

fn cmd_generate(cli: &Cli) -> Result<()> {
    let quiet = cli.dry_run || cli.json;

    if !quiet {
        println!("📋 confgen");
    }

    let mut forest = default_forest();
    let mut pruned: Vec<String> = Vec::new();

    if !cli.skip_probe {
        if !quiet {
            println!("Probe: {}", cli.fastfetch.display());
        }

        let probe_document = ConfigDocument::from_forest(&forest);
        let entries = run_probe(&probe_document, &cli.fastfetch)?;
        pruned = disqualified_kinds(&entries);

        if !quiet {
            println!(
                "\n✓ Probed {} modules, {} disqualified",
                entries.len(),
                pruned.len()
            );
            if cli.verbose > 0 {
                report_outcomes(&entries);
            }
        }

        for kind in &pruned {
            for root in forest.iter_mut() {
                root.remove_module(kind);
            }
        }
    } else if !quiet {
        println!("Probe: skipped, keeping the full catalog");
    }

    for root in forest.iter_mut() {
        root.prettify("", "");
    }

    let document = ConfigDocument::from_forest(&forest);
    let rendered = document.to_json_string()?;

    if cli.dry_run {
        print!("{rendered}");
        return Ok(());
    }

    let path = match &cli.output {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    write_config(&path, &rendered)?;

    if cli.json {
        let event = serde_json::json!({
            "event": "generate",
            "modules": document.modules.len(),
            "pruned": pruned,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("✓ Wrote {} modules to {}", document.modules.len(), path.display());
    }

    Ok(())
}

fn report_outcomes(entries: &[ProbeEntry]) {
    for entry in entries {
        if entry.is_disqualified() {
            let reason = entry.error.as_deref().unwrap_or("empty result");
            println!("  ✗ {} - {}", entry.config_kind(), reason);
        } else {
            println!("  ✓ {}", entry.config_kind());
        }
    }
}

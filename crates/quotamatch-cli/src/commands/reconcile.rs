//! Reconcile command - match statement amounts against a roster file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use quotamatch_core::{
    format_italian_amount, roster_from_json, CoreConfig, MatchRecord, StatementReconciler,
};

/// Arguments for the reconcile command.
#[derive(Args)]
pub struct ReconcileArgs {
    /// Statement file (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Roster file (JSON array of members)
    #[arg(short, long)]
    roster: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ReconcileArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        CoreConfig::from_file(std::path::Path::new(path))?
    } else {
        CoreConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Statement file not found: {}", args.input.display());
    }

    let roster_payload = fs::read_to_string(&args.roster)
        .with_context(|| format!("failed to read roster file {}", args.roster.display()))?;
    let roster = roster_from_json(&roster_payload)?;
    info!("Loaded roster with {} members", roster.len());

    let data = fs::read(&args.input)?;
    let reconciler = StatementReconciler::with_config(config);
    let matches = reconciler.reconcile_pdf(&data, &roster)?;

    let output = format_matches(&matches, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if matches.is_empty() {
        eprintln!("{} No candidate matches found", style("ℹ").blue());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_matches(matches: &[MatchRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(matches)?),
        OutputFormat::Csv => format_csv(matches),
        OutputFormat::Text => format_text(matches),
    }
}

fn format_csv(matches: &[MatchRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "linea_originale",
        "membro_id",
        "nome_trovato",
        "importo_trovato",
        "confidenza",
    ])?;

    for record in matches {
        let membro_id = record.membro_id.to_string();
        let importo = record.importo_trovato.to_string();
        wtr.write_record([
            record.linea_originale.as_str(),
            membro_id.as_str(),
            record.nome_trovato.as_str(),
            importo.as_str(),
            record.confidenza.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(matches: &[MatchRecord]) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!("Candidate matches: {}\n", matches.len()));

    for record in matches {
        output.push_str(&format!(
            "  {} <- {}  ({})\n",
            record.nome_trovato,
            format_italian_amount(record.importo_trovato),
            record.linea_originale
        ));
    }

    Ok(output)
}

// Command-line interface for srcrec
//
// Reads paper metadata files or a materials file and prints the extracted
// records as a JSON array on stdout.
//
// Usage:
//  srcrec [-v] papers <FILE>...      - One record per file, compact JSON
//  srcrec [-v] materials <FILE>      - One record per dash-delimited block, pretty JSON
//
// Diagnostics go to stderr. Exit status is 2 for usage errors (from clap) and 1
// when extraction fails.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use srcrec::json::write_json_array;
use srcrec::{ExtractConfig, MaterialReader, OutputStyle, PaperReader};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Exit status when extraction fails.
const EXIT_FAILURE: i32 = 1;

fn build_cli() -> Command {
    Command::new("srcrec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract JSON records from paper metadata and materials source files")
        .long_about(
            "srcrec reads source data files and prints their records as a JSON array.\n\n\
            Commands:\n  \
            - papers:    tagged-line metadata files, one paper per file\n  \
            - materials: one fixed-column file, blocks separated by dash lines\n\n\
            Examples:\n  \
            srcrec papers metadata/0001.txt metadata/0002.txt > papers.json\n  \
            srcrec -v materials materials.txt > materials.json",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log per-record summaries and timing to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .value_name("STYLE")
                .help("Force JSON layout instead of the per-command default")
                .value_parser(["compact", "pretty"])
                .global(true),
        )
        .subcommand(
            Command::new("papers")
                .about("Extract paper metadata, one record per file")
                .arg(
                    Arg::new("files")
                        .help("Metadata files, processed in order")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("materials")
                .about("Extract material records from one dash-delimited file")
                .arg(
                    Arg::new("file")
                        .help("Materials file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "srcrec=info" } else { "srcrec=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn config_from_matches(matches: &ArgMatches) -> ExtractConfig {
    let mut config = ExtractConfig::new().with_verbose(matches.get_flag("verbose"));
    match matches.get_one::<String>("style").map(String::as_str) {
        Some("compact") => config = config.with_output_style(OutputStyle::Compact),
        Some("pretty") => config = config.with_output_style(OutputStyle::Pretty),
        _ => {},
    }
    config
}

fn run_papers(files: &[PathBuf], config: ExtractConfig) -> anyhow::Result<usize> {
    let style = config.paper_style();
    let mut reader = PaperReader::new(config);
    let papers = reader
        .read_paths(files)
        .context("paper extraction failed")?;
    emit(&papers, style)?;
    Ok(papers.len())
}

fn run_materials(file: &Path, config: ExtractConfig) -> anyhow::Result<usize> {
    let style = config.material_style();
    let mut reader = MaterialReader::new(config);
    let materials = reader
        .read_path(file)
        .context("material extraction failed")?;
    emit(&materials, style)?;
    Ok(materials.len())
}

fn emit<T: serde::Serialize>(records: &[T], style: OutputStyle) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json_array(&mut out, records, style).context("failed to write JSON")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let start = Instant::now();
    tracing::info!("started");

    let (command, sub_matches) = matches
        .subcommand()
        .context("a subcommand is required")?;
    let config = config_from_matches(sub_matches);

    let count = match command {
        "papers" => {
            let files: Vec<PathBuf> = sub_matches
                .get_many::<PathBuf>("files")
                .context("missing filename(s) argument")?
                .cloned()
                .collect();
            run_papers(&files, config)?
        },
        "materials" => {
            let file = sub_matches
                .get_one::<PathBuf>("file")
                .context("missing filename argument")?;
            run_materials(file, config)?
        },
        other => anyhow::bail!("unknown command '{other}'"),
    };

    tracing::info!(
        records = count,
        seconds = start.elapsed().as_secs_f64(),
        "finished"
    );
    Ok(())
}

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches
        .subcommand()
        .is_some_and(|(_, sub)| sub.get_flag("verbose"));
    init_tracing(verbose);

    if let Err(e) = run(&matches) {
        eprintln!("ERROR, UNEXPECTED EXCEPTION");
        eprintln!("{e}");
        eprintln!("{e:?}");
        process::exit(EXIT_FAILURE);
    }
}

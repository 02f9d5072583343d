use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use fafnir::error::FafnirError;
use fafnir::logging::{directive_for_verbosity, init_tracing, init_tracing_json};
use fafnir::triage::config::{TriageConfig, DEFAULT_SIGNATURE_DB};
use fafnir::triage::io::IOUtils;
use fafnir::triage::report::TextReport;
use fafnir::triage::{analyze_path, SignatureDatabase};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "fafnir")]
#[command(version)]
#[command(about = "Identify a file's real type and flag masquerading", long_about = None)]
struct Cli {
    /// File to analyze
    file: PathBuf,

    /// Signature definition file
    #[arg(long, default_value = DEFAULT_SIGNATURE_DB)]
    db: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Emit diagnostics as JSON lines on stderr
    #[arg(long)]
    log_json: bool,

    /// Increase diagnostic verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if !IOUtils::is_regular_file(&cli.file) {
        return Err(FafnirError::NotFound(cli.file.clone()).into());
    }

    let db = SignatureDatabase::load(&cli.db)
        .with_context(|| format!("loading signatures from {}", cli.db.display()))?;
    let cfg = TriageConfig::default();
    let report = analyze_path(&cli.file, &db, &cfg)?;

    let mut out = io::stdout().lock();
    if cli.json {
        writeln!(out, "{}", report.to_json_string()?).map_err(FafnirError::from)?;
    } else {
        writeln!(out, "\n{}\n", TextReport(&report)).map_err(FafnirError::from)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let err = FafnirError::Usage(e.kind().to_string());
            eprintln!("[!] {}", err);
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let directive = directive_for_verbosity(cli.verbose);
    if cli.log_json {
        init_tracing_json(directive);
    } else {
        init_tracing(directive);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<FafnirError>() {
            Some(FafnirError::NotFound(_)) => {
                println!("[!] File not found");
                ExitCode::from(1)
            }
            Some(fe) => {
                eprintln!("[!] {:#}", err);
                ExitCode::from(fe.exit_code() as u8)
            }
            None => {
                eprintln!("[!] {:#}", err);
                ExitCode::from(3)
            }
        },
    }
}

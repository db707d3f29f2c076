use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use greeting_service::GreetingConsumer;
use serde::Serialize;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "greet", about = "Write a greeting to stdout or a file sink")]
struct Cli {
    /// Name to greet; falls back to the library default when omitted
    name: Option<String>,

    /// Write the greeting to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit a JSON record of the greeting instead of the raw text
    #[arg(long)]
    json: bool,
}

/// Serialized form of one greeting run for `--json` consumers.
#[derive(Serialize)]
struct GreetingRecord {
    name: Option<String>,
    greeting: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("greet error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    debug!("greeting {:?} (json={})", cli.name, cli.json);

    let consumer = GreetingConsumer::new();
    let name = cli.name.as_deref();

    if cli.json {
        // Collect through an in-memory sink so the record carries exactly the
        // bytes a plain run would have written.
        let mut sink = Vec::new();
        consumer.greet(name, &mut sink)?;
        let greeting = String::from_utf8(sink).context("greeting was not valid UTF-8")?;

        let record = GreetingRecord {
            name: cli.name.clone(),
            greeting,
        };
        let rendered =
            serde_json::to_string_pretty(&record).context("failed to encode greeting record")?;
        emit(cli.output.as_deref(), rendered.as_bytes())
    } else {
        match cli.output.as_deref() {
            Some(path) => {
                let mut sink = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                consumer.greet(name, &mut sink)?;
                Ok(())
            }
            None => {
                let stdout = io::stdout();
                let mut sink = stdout.lock();
                consumer.greet(name, &mut sink)?;
                writeln!(sink)?;
                Ok(())
            }
        }
    }
}

/// Write `bytes` to the file at `path`, or to stdout with a trailing
/// newline.
fn emit(path: Option<&std::path::Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(bytes)?;
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(bytes)?;
            writeln!(handle)?;
            Ok(())
        }
    }
}

//! GameGate - command-line manifest validator.
//!
//! ```text
//! gamegate <MANIFEST>...      (use - to read stdin)
//! ```
//!
//! Prints one JSON `ValidationResult` per input on stdout, in argument
//! order, and a statistics summary on stderr. An input that cannot be read
//! is reported as a failed result and the batch continues. Exits 0 when
//! every manifest passed, 1 when any failed or could not be read, and 2 on
//! usage errors.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamegate_engine::{ContentValidator, ValidationResult, ValidatorSettings};

/// Validate machine-generated game manifests before deployment.
///
/// Settings are read from `GAMEGATE_*` environment variables, including
/// those in `.env.local` and `.env`.
#[derive(Parser, Debug)]
#[command(name = "gamegate", version, about, long_about = None)]
struct Cli {
    /// Manifest files to validate. Use `-` to read standard input.
    #[arg(required = true, value_name = "MANIFEST")]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Local overrides first; values already in the environment win.
    for filename in [".env.local", ".env"] {
        if Path::new(filename).exists() {
            let _ = dotenvy::from_filename(filename);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamegate_engine=info,gamegate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = ValidatorSettings::from_env();
    let validator = Arc::new(
        ContentValidator::new(settings).context("Invalid GAMEGATE_* configuration")?,
    );
    tracing::debug!(inputs = cli.files.len(), "Starting validation");

    let all_passed = run_batch(&validator, &cli.files, &mut std::io::stdout().lock()).await?;

    let stats = validator.stats();
    eprintln!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Validate every input in order, writing one JSON line each to `out`.
///
/// Returns whether every input was read and accepted. Only a failure to
/// write to `out` ends the batch early.
async fn run_batch(
    validator: &Arc<ContentValidator>,
    files: &[PathBuf],
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_passed = true;
    for file in files {
        let result = match read_input(file) {
            Ok(text) => Arc::clone(validator).validate_str_async(text).await,
            Err(e) => {
                let detail = format!("{:#}", e);
                tracing::error!(input = %file.display(), error = %detail, "Skipping unreadable input");
                ValidationResult::unreadable(&detail)
            }
        };
        all_passed &= result.success;
        writeln!(out, "{}", serde_json::to_string(&result)?)
            .context("Failed to write validation result")?;
    }
    Ok(all_passed)
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read manifest from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read manifest '{}'", input.display()))
    }
}

use crate::generator::generate_binding;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line interface for pyxgen
///
/// One positional path list, no flags: build pipelines invoke this once
/// per changed header set and want nothing to configure.
#[derive(Parser)]
#[command(name = "pyxgen")]
#[command(about = "Generate Cython .pyx bindings from C++ struct headers", long_about = None)]
pub struct Cli {
    /// Header files to process (each must end in .h)
    #[arg(required = true)]
    pub headers: Vec<PathBuf>,
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if any path lacks the `.h` extension (before any
/// file is read), or if any header failed to scan or write.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli.headers)
}

/// Process a batch of header paths
///
/// The extension check runs over the whole batch up front so a usage
/// mistake never produces partial output. Scan failures are reported
/// per header and the remaining headers still run.
pub fn run(headers: &[PathBuf]) -> anyhow::Result<()> {
    for path in headers {
        if !is_header_path(path) {
            anyhow::bail!("Not a header file: {}", path.display());
        }
    }

    let mut failures = 0usize;
    for path in headers {
        if let Err(err) = generate_binding(path) {
            eprintln!("❌ {}: {err:#}", path.display());
            failures += 1;
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} header(s) failed", headers.len());
    }
    Ok(())
}

fn is_header_path(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("h")
}

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::synthesize_binding;
use crate::header::load_header;

/// Output path derived from a header path
///
/// Same directory, base name prefixed with `_`, extension replaced with
/// `.pyx`: `dir/foo.h` becomes `dir/_foo.pyx`.
pub fn output_path_for(header: &Path) -> PathBuf {
    let stem = header
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    header.with_file_name(format!("_{stem}.pyx"))
}

/// Scan one header file and write its binding source next to it
///
/// The binding is only written when the whole pipeline succeeded; a scan
/// failure leaves no partial artifact behind. Returns the output path.
pub fn generate_binding(header: &Path) -> anyhow::Result<PathBuf> {
    let model = load_header(header)?;
    let header_file = header.to_string_lossy();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let rendered = synthesize_binding(&model, &header_file, &timestamp)?;

    let out_path = output_path_for(header);
    fs::write(&out_path, rendered)
        .with_context(|| format!("Failed to write binding: {out_path:?}"))?;
    println!("✅ Generated binding: {out_path:?}");
    Ok(out_path)
}

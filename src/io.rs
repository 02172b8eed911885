use anyhow::{bail, Context, Result};
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(feature = "serde")]
use crate::model::YearCalendar;
#[cfg(feature = "serde")]
use std::io::Write;

/// File name convention for the generated document, written to the current
/// working directory.
pub fn default_output_name(year: i32) -> String {
    format!("Calendar_{year}_Writable.docx")
}

/// Startup validation: the output location must accept new files before any
/// document work starts. Probes with a throwaway temp file.
pub fn preflight<P: AsRef<Path>>(out_path: P) -> Result<()> {
    let dir = parent_dir(out_path.as_ref());
    if !dir.is_dir() {
        bail!("output directory {} does not exist", dir.display());
    }
    NamedTempFile::new_in(dir)
        .with_context(|| format!("output directory {} is not writable", dir.display()))?;
    Ok(())
}

/// Writes the resolved observances as pretty JSON, atomically.
#[cfg(feature = "serde")]
pub fn export_events_json<P: AsRef<Path>>(path: P, calendar: &YearCalendar) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(calendar)?;
    let mut tmp = NamedTempFile::new_in(parent_dir(path)).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

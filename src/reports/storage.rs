use super::types::ReportLog;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default report log path (~/.config/welivehere/reports.json)
pub fn get_reports_path() -> PathBuf {
    crate::config::get_config_dir().join("reports.json")
}

/// Load the report log from a JSON file
///
/// If the file doesn't exist, returns a new empty log.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_report_log(path: &Path) -> Result<ReportLog> {
    if !path.exists() {
        return Ok(ReportLog::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open report log at {}", path.display()))?;

    let log: ReportLog = serde_json::from_reader(file).context("Failed to load report log")?;

    // Version check
    if log.version != 1 {
        anyhow::bail!("Unsupported report log version: {}", log.version);
    }

    Ok(log)
}

/// Save the report log to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left in a corrupted
/// state. Creates the config directory if it doesn't exist.
pub fn save_report_log(path: &Path, log: &ReportLog) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, log).context("Failed to serialize report log")?;

    file.commit().context("Failed to save report log")?;

    Ok(())
}

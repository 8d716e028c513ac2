//! Persona writer — one UTF-8 text file per run.

use std::path::{Path, PathBuf};

use crate::error::{PersonaError, PersonaResult};

/// Write the persona under `output_dir` as
/// `persona_<username>_<YYYYMMDD_HHMMSS>.txt` (local time) and return the
/// full path. The directory is created if missing.
pub fn write_persona(persona: &str, username: &str, output_dir: &Path) -> PersonaResult<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        PersonaError::Directory(output_dir.display().to_string(), e.to_string())
    })?;

    let filename = format!(
        "persona_{}_{}.txt",
        username,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let filepath = output_dir.join(filename);

    std::fs::write(&filepath, persona)
        .map_err(|e| PersonaError::Write(filepath.display().to_string(), e.to_string()))?;

    tracing::info!(path = %filepath.display(), "Persona saved");
    Ok(filepath)
}

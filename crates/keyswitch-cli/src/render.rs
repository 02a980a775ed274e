use std::path::{Path, PathBuf};

use anyhow::Context;
use keyswitch_export::render_kicad_mod;
use keyswitch_footprint::{generate_library, LibraryConfig, LibraryGroup};
use tracing::{debug, info};

use crate::error::CliError;

pub fn run(output: PathBuf, config: Option<&Path>, clean: bool) -> Result<(), CliError> {
    let config = load_config(config)?;
    let groups = generate_library(&config)?;

    if clean && output.exists() {
        info!(output = %output.display(), "cleaning output folder");
        std::fs::remove_dir_all(&output)
            .with_context(|| format!("Could not remove {}", output.display()))?;
    }
    let written = write_library(&output, &groups)?;
    info!(groups = groups.len(), footprints = written, "done");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LibraryConfig, CliError> {
    let Some(path) = path else {
        debug!("no config given, using the stock library");
        return Ok(LibraryConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CliError::input(format!("Could not read config {}: {e}", path.display())))?;
    LibraryConfig::from_yaml_str(&raw)
        .map_err(|e| CliError::input(format!("Invalid config {}: {e}", path.display())))
}

/// Write every group to `<output>/<group>.pretty/<footprint>.kicad_mod`; returns the number of
/// files written.
fn write_library(output: &Path, groups: &[LibraryGroup]) -> anyhow::Result<usize> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("Could not create output directory {}", output.display()))?;

    let mut written = 0;
    for group in groups {
        let dir = output.join(format!("{}.pretty", group.name));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
        for footprint in &group.footprints {
            let path = dir.join(format!("{}.kicad_mod", footprint.name));
            std::fs::write(&path, render_kicad_mod(footprint))
                .with_context(|| format!("Could not write {}", path.display()))?;
            debug!(path = %path.display(), "wrote footprint");
            written += 1;
        }
        info!(group = %group.name, footprints = group.footprints.len(), "wrote library");
    }
    Ok(written)
}

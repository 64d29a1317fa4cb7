use crate::data::holiday::festival_holidays_2024;
use crate::data::persistence::{Persistable, get_data_dir};
use crate::data::region::ConfigFile;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    tracing::info!(dir = %dir.display(), "data directory initialized");
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    ConfigFile::default().save_to(dir)?;
    festival_holidays_2024().save_to(dir)?;
    Ok(())
}

pub mod batch;
pub mod check;
pub mod count;
pub mod holidays;
pub mod init;
pub mod sample;

use crate::calc::WorkingDayCalculator;
use crate::data::{HolidayData, Persistable, RegionConfig};
use anyhow::{Context, Result};

/// Region settings and custom holidays from the data directory, plus the
/// calculator built from them.
pub(crate) struct Loaded {
    pub region: RegionConfig,
    pub holidays: HolidayData,
    pub calculator: WorkingDayCalculator,
}

pub(crate) fn load() -> Result<Loaded> {
    let region = RegionConfig::load()?;
    let holidays = HolidayData::load()?;
    let calculator = region
        .calculator(&holidays)
        .with_context(|| format!("invalid holiday configuration for region '{}'", region.name))?;
    Ok(Loaded {
        region,
        holidays,
        calculator,
    })
}

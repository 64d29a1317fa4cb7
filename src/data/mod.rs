pub mod holiday;
pub mod persistence;
pub mod region;

pub use holiday::HolidayData;
pub use persistence::Persistable;
pub use region::RegionConfig;

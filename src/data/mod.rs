pub mod dataset;
pub mod directory;
pub mod source;

pub use dataset::{CityDataset, RawCityPayload, normalize};
pub use directory::{CityDirectory, CityRecord};
pub use source::{DataSource, DataSourceConfig, directory_or_fallback};

#[cfg(feature = "fetch")]
pub use source::HttpDataSource;

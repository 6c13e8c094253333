use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::dataset::RawCityPayload;
use crate::data::directory::CityDirectory;
use crate::error::ChartResult;

/// Endpoint layout of the meteogram data tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub base_url: String,
    pub model_dir: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "/data/meteogram".to_owned(),
            model_dir: "wrf".to_owned(),
        }
    }
}

impl DataSourceConfig {
    #[must_use]
    pub fn cities_url(&self) -> String {
        format!("{}/{}/cities.json", self.base_url, self.model_dir)
    }

    #[must_use]
    pub fn city_url(&self, slug: &str) -> String {
        format!("{}/{}/{slug}.json", self.base_url, self.model_dir)
    }
}

/// Fetch collaborator boundary.
///
/// The rendering engine has no network awareness; fetch failures are the
/// only errors surfaced to the caller, identifying the failed URL and HTTP
/// status.
pub trait DataSource {
    fn fetch_directory(&self) -> ChartResult<CityDirectory>;
    fn fetch_city(&self, slug: &str) -> ChartResult<RawCityPayload>;
}

/// Resolves the city directory, degrading to the frozen fallback list when
/// the fetch fails or returns no entries.
#[must_use]
pub fn directory_or_fallback(source: &dyn DataSource) -> CityDirectory {
    match source.fetch_directory() {
        Ok(directory) if !directory.is_empty() => directory,
        Ok(_) => {
            warn!("city directory fetch returned no entries, using fallback list");
            CityDirectory::fallback()
        }
        Err(err) => {
            warn!(%err, "city directory fetch failed, using fallback list");
            CityDirectory::fallback()
        }
    }
}

#[cfg(feature = "fetch")]
mod http {
    use reqwest::blocking::Client;
    use reqwest::header::{CACHE_CONTROL, HeaderValue};

    use super::{DataSource, DataSourceConfig};
    use crate::data::dataset::RawCityPayload;
    use crate::data::directory::{CityDirectory, CityRecord};
    use crate::error::{ChartError, ChartResult};

    /// Blocking HTTP data source over the configured data tree.
    ///
    /// Responses are requested uncached; forecast files are regenerated in
    /// place under stable URLs.
    #[derive(Debug)]
    pub struct HttpDataSource {
        client: Client,
        config: DataSourceConfig,
    }

    impl HttpDataSource {
        pub fn new(config: DataSourceConfig) -> ChartResult<Self> {
            let client = Client::builder().build().map_err(|err| {
                ChartError::Transport {
                    url: config.base_url.clone(),
                    message: err.to_string(),
                }
            })?;
            Ok(Self { client, config })
        }

        #[must_use]
        pub fn config(&self) -> &DataSourceConfig {
            &self.config
        }

        fn get_json(&self, url: &str) -> ChartResult<serde_json::Value> {
            let response = self
                .client
                .get(url)
                .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
                .send()
                .map_err(|err| ChartError::Transport {
                    url: url.to_owned(),
                    message: err.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(ChartError::Fetch {
                    url: url.to_owned(),
                    status: status.as_u16(),
                });
            }

            response.json().map_err(|err| ChartError::Transport {
                url: url.to_owned(),
                message: err.to_string(),
            })
        }
    }

    impl DataSource for HttpDataSource {
        fn fetch_directory(&self) -> ChartResult<CityDirectory> {
            let url = self.config.cities_url();
            let value = self.get_json(&url)?;
            let records: Vec<CityRecord> =
                serde_json::from_value(value).map_err(|err| ChartError::Transport {
                    url,
                    message: err.to_string(),
                })?;
            Ok(CityDirectory::from_records(records))
        }

        fn fetch_city(&self, slug: &str) -> ChartResult<RawCityPayload> {
            let url = self.config.city_url(slug);
            let value = self.get_json(&url)?;
            Ok(RawCityPayload::from_value(&value))
        }
    }
}

#[cfg(feature = "fetch")]
pub use http::HttpDataSource;

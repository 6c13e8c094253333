use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::data::directory::CityDirectory;

/// Raw per-city payload as fetched. Every field is optional; absent or
/// malformed fields degrade to defaults during normalization, never to
/// errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCityPayload {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timestamps: Option<Vec<String>>,
    pub temp: Option<Vec<f64>>,
    pub precip: Option<Vec<f64>>,
    pub wind: Option<Vec<f64>>,
    pub rh: Option<Vec<f64>>,
}

impl RawCityPayload {
    /// Coerces arbitrary fetched JSON into the payload shape.
    ///
    /// Non-array series fields and non-numeric scalars are treated as
    /// absent; non-numeric array elements become NaN so they are skipped by
    /// range computation but keep index alignment.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let object = match value.as_object() {
            Some(object) => object,
            None => return Self::default(),
        };

        let string_array = |key: &str| -> Option<Vec<String>> {
            object.get(key)?.as_array().map(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().unwrap_or_default().to_owned())
                    .collect()
            })
        };
        let number_array = |key: &str| -> Option<Vec<f64>> {
            object.get(key)?.as_array().map(|items| {
                items
                    .iter()
                    .map(|item| item.as_f64().unwrap_or(f64::NAN))
                    .collect()
            })
        };

        Self {
            city: object
                .get("city")
                .and_then(Value::as_str)
                .map(str::to_owned),
            lat: object.get("lat").and_then(Value::as_f64),
            lon: object.get("lon").and_then(Value::as_f64),
            timestamps: string_array("timestamps"),
            temp: number_array("temp"),
            precip: number_array("precip"),
            wind: number_array("wind"),
            rh: number_array("rh"),
        }
    }
}

/// Fully aligned dataset for one city.
///
/// Invariant: all four measurement series and the timestamp sequence share
/// exactly the same length. Replaced wholesale on each successful load,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityDataset {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub timestamps: Vec<DateTime<Utc>>,
    pub temp: Vec<f64>,
    pub precip: Vec<f64>,
    pub wind: Vec<f64>,
    pub rh: Vec<f64>,
}

impl CityDataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// First-to-last timestamp label for header badges, `—` when empty.
    #[must_use]
    pub fn date_range_label(&self) -> String {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => format!(
                "{} → {}",
                first.format("%Y-%m-%d %Hh"),
                last.format("%Y-%m-%d %Hh")
            ),
            _ => "—".to_owned(),
        }
    }
}

/// Aligns a raw payload into a fully populated dataset.
///
/// Unparseable timestamps are dropped first; every sequence is then trimmed
/// to the minimum surviving length, so index correspondence across series
/// is only guaranteed when the input was consistent per record. City
/// name and coordinates fall back to the directory record matched by slug
/// (first known city for unknown slugs). A zero-length dataset is valid
/// output and renders as empty axes.
#[must_use]
pub fn normalize(slug: &str, raw: &RawCityPayload, directory: &CityDirectory) -> CityDataset {
    let fallback = directory.lookup_or_first(slug);

    let raw_timestamp_count = raw.timestamps.as_ref().map_or(0, Vec::len);
    let mut timestamps: Vec<DateTime<Utc>> = raw
        .timestamps
        .iter()
        .flatten()
        .filter_map(|text| parse_timestamp(text))
        .collect();
    let dropped = raw_timestamp_count - timestamps.len();
    if dropped > 0 {
        debug!(slug, dropped, "dropped unparseable timestamps");
    }

    let mut temp = raw.temp.clone().unwrap_or_default();
    let mut precip = raw.precip.clone().unwrap_or_default();
    let mut wind = raw.wind.clone().unwrap_or_default();
    let mut rh = raw.rh.clone().unwrap_or_default();

    let n = timestamps
        .len()
        .min(temp.len())
        .min(precip.len())
        .min(wind.len())
        .min(rh.len());
    timestamps.truncate(n);
    temp.truncate(n);
    precip.truncate(n);
    wind.truncate(n);
    rh.truncate(n);

    CityDataset {
        city: raw
            .city
            .clone()
            .or_else(|| fallback.map(|record| record.name.clone()))
            .unwrap_or_else(|| slug.to_owned()),
        lat: raw
            .lat
            .filter(|value| value.is_finite())
            .or_else(|| fallback.map(|record| record.lat))
            .unwrap_or(0.0),
        lon: raw
            .lon
            .filter(|value| value.is_finite())
            .or_else(|| fallback.map(|record| record.lon))
            .unwrap_or(0.0),
        timestamps,
        temp,
        precip,
        wind,
        rh,
    }
}

/// Parses one timestamp entry. RFC 3339 first, then the common naive
/// date-time spellings seen in the data files.
pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc());
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

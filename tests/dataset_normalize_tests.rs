use chrono::{TimeZone, Utc};
use meteogram::data::{CityDirectory, RawCityPayload, normalize};
use serde_json::json;

fn payload_with_lengths(timestamps: usize, temp: usize, others: usize) -> RawCityPayload {
    let ts: Vec<String> = (0..timestamps)
        .map(|h| format!("2024-03-05T{:02}:00:00Z", h % 24))
        .collect();
    RawCityPayload {
        timestamps: Some(ts),
        temp: Some(vec![20.0; temp]),
        precip: Some(vec![0.0; others]),
        wind: Some(vec![5.0; others]),
        rh: Some(vec![50.0; others]),
        ..RawCityPayload::default()
    }
}

#[test]
fn all_sequences_trim_to_the_shortest_length() {
    let dataset = normalize(
        "veracruz",
        &payload_with_lengths(10, 8, 10),
        &CityDirectory::fallback(),
    );
    assert_eq!(dataset.timestamps.len(), 8);
    assert_eq!(dataset.temp.len(), 8);
    assert_eq!(dataset.precip.len(), 8);
    assert_eq!(dataset.wind.len(), 8);
    assert_eq!(dataset.rh.len(), 8);
}

#[test]
fn unparseable_timestamps_shrink_the_aligned_length() {
    let mut payload = payload_with_lengths(6, 6, 6);
    let timestamps = payload.timestamps.as_mut().unwrap();
    timestamps[2] = "not a date".to_owned();
    timestamps[4] = String::new();

    let dataset = normalize("veracruz", &payload, &CityDirectory::fallback());
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.temp.len(), 4);
}

#[test]
fn missing_series_become_empty_and_empty_datasets_are_valid() {
    let payload = RawCityPayload {
        timestamps: Some(vec!["2024-03-05T00:00:00Z".to_owned()]),
        temp: Some(vec![20.0]),
        ..RawCityPayload::default()
    };
    let dataset = normalize("veracruz", &payload, &CityDirectory::fallback());
    assert!(dataset.is_empty());
    assert!(dataset.temp.is_empty());
    assert_eq!(dataset.date_range_label(), "—");
}

#[test]
fn city_metadata_falls_back_to_the_directory_record() {
    let dataset = normalize(
        "veracruz",
        &RawCityPayload::default(),
        &CityDirectory::fallback(),
    );
    assert_eq!(dataset.city, "Veracruz");
    assert_eq!(dataset.lat, 19.1738);
    assert_eq!(dataset.lon, -96.1342);
}

#[test]
fn unknown_slug_falls_back_to_the_first_known_city() {
    let dataset = normalize(
        "atlantis",
        &RawCityPayload::default(),
        &CityDirectory::fallback(),
    );
    assert_eq!(dataset.city, "Ciudad de México");
}

#[test]
fn non_finite_coordinates_are_replaced() {
    let payload = RawCityPayload {
        lat: Some(f64::NAN),
        lon: Some(-96.0),
        ..RawCityPayload::default()
    };
    let dataset = normalize("veracruz", &payload, &CityDirectory::fallback());
    assert_eq!(dataset.lat, 19.1738);
    assert_eq!(dataset.lon, -96.0);
}

#[test]
fn payload_coercion_treats_non_arrays_as_absent() {
    let value = json!({
        "city": "Testville",
        "lat": "not a number",
        "timestamps": "not an array",
        "temp": [1.0, "x", 3.0],
        "precip": 42,
    });
    let payload = RawCityPayload::from_value(&value);
    assert_eq!(payload.city.as_deref(), Some("Testville"));
    assert_eq!(payload.lat, None);
    assert_eq!(payload.timestamps, None);
    assert_eq!(payload.precip, None);

    let temp = payload.temp.unwrap();
    assert_eq!(temp.len(), 3);
    assert!(temp[1].is_nan());
}

#[test]
fn non_object_payload_coerces_to_defaults() {
    let payload = RawCityPayload::from_value(&json!([1, 2, 3]));
    assert_eq!(payload, RawCityPayload::default());
}

#[test]
fn naive_timestamp_spellings_parse_as_utc() {
    let payload = RawCityPayload {
        timestamps: Some(vec![
            "2024-03-05T06:00:00Z".to_owned(),
            "2024-03-05 06:00:00".to_owned(),
            "2024-03-05T06:00".to_owned(),
            "2024-03-05 06:00".to_owned(),
        ]),
        temp: Some(vec![20.0; 4]),
        precip: Some(vec![0.0; 4]),
        wind: Some(vec![5.0; 4]),
        rh: Some(vec![50.0; 4]),
        ..RawCityPayload::default()
    };

    let dataset = normalize("veracruz", &payload, &CityDirectory::fallback());
    assert_eq!(dataset.len(), 4);
    // All four spellings name the same instant.
    let expected = Utc.with_ymd_and_hms(2024, 3, 5, 6, 0, 0).unwrap();
    assert!(dataset.timestamps.iter().all(|ts| *ts == expected));
}

#[test]
fn bare_dates_parse_as_midnight() {
    let payload = RawCityPayload {
        timestamps: Some(vec!["2024-03-05".to_owned()]),
        temp: Some(vec![20.0]),
        precip: Some(vec![0.0]),
        wind: Some(vec![5.0]),
        rh: Some(vec![50.0]),
        ..RawCityPayload::default()
    };

    let dataset = normalize("veracruz", &payload, &CityDirectory::fallback());
    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.timestamps[0],
        Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()
    );
}

#[test]
fn date_range_label_spans_first_to_last() {
    let dataset = normalize(
        "veracruz",
        &payload_with_lengths(3, 3, 3),
        &CityDirectory::fallback(),
    );
    assert_eq!(dataset.date_range_label(), "2024-03-05 00h → 2024-03-05 02h");
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the city directory served alongside the per-city datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub slug: String,
    pub lat: f64,
    pub lon: f64,
}

impl CityRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            lat,
            lon,
        }
    }
}

/// Ordered, slug-keyed city directory.
///
/// Insertion order is preserved so dropdown-style consumers list cities the
/// way the directory file orders them, while slug lookup stays O(1).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityDirectory {
    records: IndexMap<String, CityRecord>,
}

impl CityDirectory {
    #[must_use]
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        let mut map = IndexMap::with_capacity(records.len());
        for record in records {
            map.insert(record.slug.clone(), record);
        }
        Self { records: map }
    }

    /// Frozen fallback list used when the directory fetch fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_records(vec![
            CityRecord::new("Ciudad de México", "ciudad-de-mexico", 19.433, -99.133),
            CityRecord::new("Veracruz", "veracruz", 19.1738, -96.1342),
            CityRecord::new("Guadalajara", "guadalajara", 20.6736, -103.344),
        ])
    }

    #[must_use]
    pub fn lookup(&self, slug: &str) -> Option<&CityRecord> {
        self.records.get(slug)
    }

    /// Slug lookup falling back to the first known city.
    #[must_use]
    pub fn lookup_or_first(&self, slug: &str) -> Option<&CityRecord> {
        self.lookup(slug).or_else(|| self.first())
    }

    #[must_use]
    pub fn first(&self) -> Option<&CityRecord> {
        self.records.values().next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityRecord> {
        self.records.values()
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One PG / hostel row from the dataset.
///
/// Column names follow the CSV header; serialisation (JSON API) uses the
/// snake_case field names instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename(deserialize = "PG Name"), default)]
    pub name: Option<String>,

    #[serde(rename(deserialize = "City"))]
    pub city: Option<String>,

    #[serde(rename(deserialize = "Nearby College"))]
    pub nearby_college: Option<String>,

    #[serde(rename(deserialize = "Rent (INR/Month)"))]
    pub rent_per_month: i64,

    #[serde(rename(deserialize = "Room Type"))]
    pub room_type: Option<String>,

    #[serde(
        rename(deserialize = "Amenities"),
        deserialize_with = "amenity_tokens",
        default
    )]
    pub amenities: Amenities,

    #[serde(rename(deserialize = "Distance to College (km)"))]
    pub distance_km: f64,

    #[serde(rename(deserialize = "Rating"))]
    pub rating: f64,
}

impl Listing {
    /// Headers that must be present in the source file.
    pub const REQUIRED_COLUMNS: [&'static str; 7] = [
        "City",
        "Nearby College",
        "Rent (INR/Month)",
        "Distance to College (km)",
        "Rating",
        "Room Type",
        "Amenities",
    ];

    /// Rejects rows that parsed but carry NaN / infinite decimals.
    pub fn validate(&self) -> Result<(), String> {
        if !self.distance_km.is_finite() {
            return Err(format!("distance is not a finite number: {}", self.distance_km));
        }
        if !self.rating.is_finite() {
            return Err(format!("rating is not a finite number: {}", self.rating));
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed PG")
    }

    pub fn amenities_label(&self) -> String {
        self.amenities.labels().join(", ")
    }
}

/// Split a comma-delimited list into trimmed, non-empty tokens.
pub fn split_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Amenity tokens as written in the dataset, plus a lowercased copy
/// built alongside them for matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Amenities {
    labels: Vec<String>,
    keys: Vec<String>,
}

impl Amenities {
    pub fn parse(raw: &str) -> Self {
        split_amenities(raw).into()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Case-insensitive containment against any token. `needle` must
    /// already be lowercase.
    pub fn contains(&self, needle: &str) -> bool {
        self.keys.iter().any(|key| key.contains(needle))
    }
}

impl From<Vec<String>> for Amenities {
    fn from(labels: Vec<String>) -> Self {
        let keys = labels.iter().map(|l| l.to_lowercase()).collect();
        Self { labels, keys }
    }
}

impl Serialize for Amenities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labels.serialize(serializer)
    }
}

fn amenity_tokens<'de, D>(deserializer: D) -> Result<Amenities, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Amenities::parse).unwrap_or_default())
}

//! Content documents shared by the remote content service and the local mirror.
//!
//! DESIGN
//! ======
//! Field names follow the service's camelCase JSON so one set of structs
//! serves both the HTTP bodies and the browser-storage documents. Timestamps
//! accept integer-compatible floats because the service and older mirrors
//! were written by a JavaScript client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Singleton homepage document: hero copy and optional background image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageContent {
    /// Display name in the hero heading.
    pub artist_name: String,
    /// Short tagline under the name.
    pub artist_title: String,
    /// Biography paragraph.
    pub artist_bio: String,
    /// Artist statement paragraph.
    pub artist_statement: String,
    /// Background image URL or `data:` URL. Empty means "use the gradient".
    #[serde(default)]
    pub background_image: String,
}

impl HomepageContent {
    /// The background image reference, if one is set.
    pub fn background(&self) -> Option<&str> {
        let trimmed = self.background_image.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Default for HomepageContent {
    fn default() -> Self {
        Self {
            artist_name: "Kalyani Kaleru".to_owned(),
            artist_title: "Mother • Wife • Artist".to_owned(),
            artist_bio: "Kalyani Kaleru weaves the threads of motherhood, partnership, and creativity \
                         into visual narratives. Her work captures the dance between responsibility and \
                         self-expression, turning everyday moments into artistic statements."
                .to_owned(),
            artist_statement: "Art is my sanctuary, my voice, and my rebellion against the ordinary. \
                               I find inspiration in the quiet moments between chaos, and every piece \
                               is a testament to pursuing a passion through life's complexities."
                .to_owned(),
            background_image: String::new(),
        }
    }
}

/// A single artwork entry in the gallery collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkItem {
    /// Unique, immutable identifier assigned when the draft is created.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub description: String,
    /// Image URL or `data:` URL.
    #[serde(default)]
    pub image_url: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
    /// Last committed edit in milliseconds since the Unix epoch.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_i64_from_number"
    )]
    pub updated_at: Option<i64>,
    /// Presentational highlight flag; drives the badge and the landing strip.
    #[serde(default)]
    pub featured: bool,
}

impl ArtworkItem {
    /// Provisional empty record used when an editor starts adding an artwork.
    pub fn provisional(id: String, year: i32, now_ms: i64) -> Self {
        Self {
            id,
            title: String::new(),
            year: year.to_string(),
            medium: String::new(),
            dimensions: String::new(),
            description: String::new(),
            image_url: String::new(),
            created_at: now_ms,
            updated_at: None,
            featured: false,
        }
    }
}

/// `GET /content/*` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// `PUT /content/*` response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    #[serde(default)]
    pub success: bool,
}

/// The four artworks shown before anything has been saved.
pub fn default_artworks() -> Vec<ArtworkItem> {
    const DAY_MS: i64 = 86_400_000;
    // Seed timestamps are fixed so SSR and hydration render identical markup.
    const SEED_EPOCH_MS: i64 = 1_735_689_600_000;

    let seed = |id: &str,
                title: &str,
                year: &str,
                medium: &str,
                dimensions: &str,
                description: &str,
                svg: &str,
                days: i64,
                featured: bool| ArtworkItem {
        id: id.to_owned(),
        title: title.to_owned(),
        year: year.to_owned(),
        medium: medium.to_owned(),
        dimensions: dimensions.to_owned(),
        description: description.to_owned(),
        image_url: svg_data_url(svg, title),
        created_at: SEED_EPOCH_MS - days * DAY_MS,
        updated_at: None,
        featured,
    };

    vec![
        seed(
            "1",
            "Neon Dreams",
            "2024",
            "Digital Art",
            "4K Digital",
            "A cyberpunk-inspired piece exploring the intersection of technology and human emotion.",
            "%3Crect width='400' height='300' fill='%23000814'/%3E%3Crect x='50' y='50' width='300' height='4' fill='%23ff0080'/%3E%3Crect x='80' y='120' width='240' height='3' fill='%2300ffff'/%3E%3Crect x='60' y='190' width='280' height='5' fill='%2300ff80'/%3E",
            1,
            true,
        ),
        seed(
            "2",
            "Midnight Aurora",
            "2024",
            "Acrylic on Canvas",
            "36 x 48 inches",
            "Abstract interpretation of northern lights dancing across a starless void.",
            "%3Crect width='400' height='300' fill='%23001219'/%3E%3Cpath d='M0 100 Q200 50 400 120 L400 160 Q200 110 0 140 Z' fill='%23ff006e' opacity='0.6'/%3E%3Cpath d='M0 140 Q200 90 400 160 L400 200 Q200 150 0 180 Z' fill='%238338ec' opacity='0.5'/%3E",
            2,
            true,
        ),
        seed(
            "3",
            "Digital Solitude",
            "2023",
            "Mixed Media Digital",
            "3000 x 4000 px",
            "Exploring themes of isolation in the digital age through abstract forms and vibrant colors.",
            "%3Crect width='400' height='300' fill='%23001122'/%3E%3Ccircle cx='200' cy='150' r='80' fill='%23ff4081' opacity='0.7'/%3E",
            3,
            false,
        ),
        seed(
            "4",
            "Quantum Fragments",
            "2023",
            "Digital Collage",
            "2400 x 3600 px",
            "A visual representation of quantum mechanics through fragmented digital imagery.",
            "%3Crect width='400' height='300' fill='%23000011'/%3E%3Cpolygon points='100,50 150,100 100,150 50,100' fill='%2300ff80' opacity='0.8'/%3E%3Cpolygon points='300,80 350,130 300,180 250,130' fill='%23ff0080' opacity='0.7'/%3E",
            4,
            false,
        ),
    ]
}

fn svg_data_url(body: &str, caption: &str) -> String {
    let caption = caption.replace(' ', "%20");
    format!(
        "data:image/svg+xml,%3Csvg width='400' height='300' viewBox='0 0 400 300' fill='none' \
         xmlns='http://www.w3.org/2000/svg'%3E{body}%3Ctext x='200' y='270' font-family='Arial' \
         font-size='18' fill='white' text-anchor='middle'%3E{caption}%3C/text%3E%3C/svg%3E"
    )
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    number_to_i64(&value).map(Some).map_err(D::Error::custom)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_to_i64(&value).map_err(D::Error::custom)
}

fn number_to_i64(value: &serde_json::Value) -> Result<i64, &'static str> {
    let serde_json::Value::Number(number) = value else {
        return Err("expected number");
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err("expected integer-compatible number")
}

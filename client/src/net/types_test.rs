use super::*;

// =============================================================
// HomepageContent
// =============================================================

#[test]
fn homepage_content_uses_camel_case_keys() {
    let content = HomepageContent::default();
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["artistName"], "Kalyani Kaleru");
    assert!(json.get("artistStatement").is_some());
    assert_eq!(json["backgroundImage"], "");
}

#[test]
fn homepage_content_missing_background_defaults_to_empty() {
    let raw = r#"{"artistName":"A","artistTitle":"B","artistBio":"C","artistStatement":"D"}"#;
    let content: HomepageContent = serde_json::from_str(raw).unwrap();
    assert_eq!(content.background_image, "");
    assert_eq!(content.background(), None);
}

#[test]
fn homepage_content_background_ignores_whitespace() {
    let mut content = HomepageContent::default();
    content.background_image = "   ".to_owned();
    assert_eq!(content.background(), None);
    content.background_image = "https://cdn.example/bg.jpg".to_owned();
    assert_eq!(content.background(), Some("https://cdn.example/bg.jpg"));
}

// =============================================================
// ArtworkItem
// =============================================================

#[test]
fn artwork_item_accepts_float_timestamps() {
    let raw = r#"{"id":"1700000000000","title":"T","imageUrl":"x","createdAt":1700000000000.0}"#;
    let item: ArtworkItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.created_at, 1_700_000_000_000);
    assert_eq!(item.updated_at, None);
    assert!(!item.featured);
}

#[test]
fn artwork_item_rejects_fractional_timestamp() {
    let raw = r#"{"id":"1","title":"T","createdAt":12.5}"#;
    assert!(serde_json::from_str::<ArtworkItem>(raw).is_err());
}

#[test]
fn artwork_item_parses_null_updated_at() {
    let raw = r#"{"id":"1","title":"T","createdAt":1,"updatedAt":null,"featured":true}"#;
    let item: ArtworkItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.updated_at, None);
    assert!(item.featured);
}

#[test]
fn artwork_item_omits_absent_updated_at() {
    let item = ArtworkItem::provisional("a".to_owned(), 2025, 10);
    let json = serde_json::to_value(&item).unwrap();
    assert!(json.get("updatedAt").is_none());
    assert_eq!(json["imageUrl"], "");
    assert_eq!(json["createdAt"], 10);
}

#[test]
fn provisional_artwork_is_blank_with_year() {
    let item = ArtworkItem::provisional("new".to_owned(), 2026, 99);
    assert_eq!(item.id, "new");
    assert_eq!(item.year, "2026");
    assert!(item.title.is_empty());
    assert!(item.image_url.is_empty());
    assert_eq!(item.created_at, 99);
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn data_envelope_null_data_is_none() {
    let env: DataEnvelope<Vec<ArtworkItem>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert!(env.data.is_none());
    let env: DataEnvelope<Vec<ArtworkItem>> = serde_json::from_str("{}").unwrap();
    assert!(env.data.is_none());
}

#[test]
fn success_envelope_defaults_to_false() {
    let env: SuccessEnvelope = serde_json::from_str("{}").unwrap();
    assert!(!env.success);
    let env: SuccessEnvelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(env.success);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_artworks_seed_four_pieces_first_two_featured() {
    let items = default_artworks();
    let titles: Vec<&str> = items.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Neon Dreams", "Midnight Aurora", "Digital Solitude", "Quantum Fragments"]);
    assert!(items[0].featured && items[1].featured);
    assert!(!items[2].featured && !items[3].featured);
    assert!(items.iter().all(|a| a.image_url.starts_with("data:image/svg+xml,")));
}

#[test]
fn default_artworks_have_unique_ids() {
    let items = default_artworks();
    let mut ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}

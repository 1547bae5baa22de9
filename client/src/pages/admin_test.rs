use super::*;
use crate::net::types::default_artworks;
use crate::util::storage::MemoryStorage;

#[test]
fn gallery_stats_counts_seed_collection() {
    let stats = GalleryStats::of(&default_artworks());
    assert_eq!(stats, GalleryStats { total: 4, featured: 2, inline_images: 4 });
}

#[test]
fn gallery_stats_ignores_linked_images() {
    let mut items = default_artworks();
    items[0].image_url = "https://cdn.example.com/a.png".to_owned();
    items.truncate(1);
    assert_eq!(GalleryStats::of(&items), GalleryStats { total: 1, featured: 1, inline_images: 0 });
}

#[test]
fn gallery_stats_empty_collection() {
    assert_eq!(GalleryStats::of(&[]), GalleryStats::default());
}

#[test]
fn identity_label_names_user_and_role() {
    let mut session = SessionGuard::restore(MemoryStorage::new());
    assert_eq!(identity_label(&session), None);
    session.login("editor@scribbledcanvas.com", "editor123").unwrap();
    assert_eq!(identity_label(&session).as_deref(), Some("Editor User (editor)"));
}

//! Artwork collection and the admin edit session around it.
//!
//! DESIGN
//! ======
//! All collection changes go through this state so the page only has to
//! persist `items` after each mutation. Ids are assigned once, when a draft is
//! started, and survive every later edit. New artworks are prepended;
//! otherwise the stored order is the display order.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::{ArtworkItem, default_artworks};

/// Fresh id for a new artwork.
pub fn new_artwork_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// What the open editor is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftMode {
    Adding,
    Editing,
}

/// An artwork being edited in the form, not yet part of the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkDraft {
    pub mode: DraftMode,
    pub item: ArtworkItem,
}

/// Why a draft cannot be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("no artwork is being edited")]
    NoDraft,
    #[error("a title is required")]
    MissingTitle,
    #[error("an image is required")]
    MissingImage,
    #[error("the artwork being edited no longer exists")]
    Vanished,
}

/// Gallery collection plus edit-session flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub items: Vec<ArtworkItem>,
    pub draft: Option<ArtworkDraft>,
    pub loading: bool,
    pub saving: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { items: default_artworks(), draft: None, loading: false, saving: false }
    }
}

impl GalleryState {
    /// Replace the collection with what the Content Store returned.
    /// `None` keeps the current items (the seeded defaults on first load).
    pub fn apply_loaded(&mut self, loaded: Option<Vec<ArtworkItem>>) {
        if let Some(items) = loaded {
            self.items = items;
        }
        self.loading = false;
    }

    /// Whether "Add" may open a new draft. Not while the collection is
    /// still loading, since the loaded items would replace the new record.
    pub fn can_begin_add(&self) -> bool {
        self.draft.is_none() && !self.saving && !self.loading
    }

    pub fn get(&self, id: &str) -> Option<&ArtworkItem> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Items flagged for the landing-page strip, in display order.
    pub fn featured(&self) -> impl Iterator<Item = &ArtworkItem> {
        self.items.iter().filter(|a| a.featured)
    }

    /// Open a provisional empty record under a fresh id.
    pub fn begin_add(&mut self, id: String, year: i32, now_ms: i64) {
        self.draft = Some(ArtworkDraft { mode: DraftMode::Adding, item: ArtworkItem::provisional(id, year, now_ms) });
    }

    /// Open a copy of an existing item. Returns false if `id` is unknown.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(item) = self.get(id).cloned() else {
            return false;
        };
        self.draft = Some(ArtworkDraft { mode: DraftMode::Editing, item });
        true
    }

    /// Apply a form change to the open draft. The id cannot be changed.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut ArtworkItem)) {
        if let Some(draft) = self.draft.as_mut() {
            let id = draft.item.id.clone();
            f(&mut draft.item);
            draft.item.id = id;
        }
    }

    /// Check the required fields of the open draft.
    ///
    /// # Errors
    ///
    /// Returns the first missing requirement.
    pub fn validate_draft(&self) -> Result<&ArtworkDraft, DraftError> {
        let draft = self.draft.as_ref().ok_or(DraftError::NoDraft)?;
        if draft.item.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if draft.item.image_url.trim().is_empty() {
            return Err(DraftError::MissingImage);
        }
        Ok(draft)
    }

    /// Whether the save control should be enabled.
    pub fn draft_is_complete(&self) -> bool {
        self.validate_draft().is_ok()
    }

    /// Move the draft into the collection: prepended when adding, replacing
    /// the item with the same id when editing.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the draft is missing, incomplete,
    /// or edits an item that has since been removed.
    pub fn commit_draft(&mut self, now_ms: i64) -> Result<(), DraftError> {
        self.validate_draft()?;
        let Some(ArtworkDraft { mode, mut item }) = self.draft.take() else {
            return Err(DraftError::NoDraft);
        };
        match mode {
            DraftMode::Adding => self.items.insert(0, item),
            DraftMode::Editing => {
                let Some(slot) = self.items.iter_mut().find(|a| a.id == item.id) else {
                    self.draft = Some(ArtworkDraft { mode, item });
                    return Err(DraftError::Vanished);
                };
                item.updated_at = Some(now_ms);
                *slot = item;
            }
        }
        Ok(())
    }

    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Remove the item with `id`. Returns false (and changes nothing) if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        if self.draft.as_ref().is_some_and(|d| d.mode == DraftMode::Editing && d.item.id == id) {
            self.draft = None;
        }
        self.items.len() != before
    }

    /// Flip the featured flag. Returns the new value, or `None` if absent.
    /// An open edit of the same item picks up the new value so committing
    /// it does not revert the toggle.
    pub fn toggle_featured(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|a| a.id == id)?;
        item.featured = !item.featured;
        let featured = item.featured;
        if let Some(draft) = self.draft.as_mut().filter(|d| d.mode == DraftMode::Editing && d.item.id == id) {
            draft.item.featured = featured;
        }
        Some(featured)
    }
}

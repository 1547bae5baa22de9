//! Homepage copy as published, plus the admin's working draft.

#[cfg(test)]
#[path = "homepage_test.rs"]
mod homepage_test;

use crate::net::types::HomepageContent;

/// Published content and optional unsaved draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomepageState {
    pub content: HomepageContent,
    pub draft: Option<HomepageContent>,
    pub loading: bool,
    pub saving: bool,
}

impl HomepageState {
    /// Adopt what the Content Store returned; `None` keeps the defaults.
    pub fn apply_loaded(&mut self, loaded: Option<HomepageContent>) {
        if let Some(content) = loaded {
            self.content = content;
        }
        self.loading = false;
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Start editing from a copy of the published content.
    pub fn begin_edit(&mut self) {
        self.draft = Some(self.content.clone());
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut HomepageContent)) {
        if let Some(draft) = self.draft.as_mut() {
            f(draft);
        }
    }

    /// Drop the draft; published content is untouched.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Publish the draft locally and hand back the document to persist.
    /// The whole document is replaced.
    pub fn commit_edit(&mut self) -> Option<HomepageContent> {
        let draft = self.draft.take()?;
        self.content = draft.clone();
        Some(draft)
    }
}

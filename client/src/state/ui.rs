//! Local UI chrome state (admin tab, save notices, backend status).
//!
//! DESIGN
//! ======
//! Keeps presentation flags out of the content states so the editors can be
//! reused on any page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Homepage,
    Artworks,
    Analytics,
}

impl AdminTab {
    pub const ALL: [Self; 3] = [Self::Homepage, Self::Artworks, Self::Analytics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Homepage => "Homepage Content",
            Self::Artworks => "Artwork Gallery",
            Self::Analytics => "Analytics",
        }
    }
}

/// Where the last save ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Accepted by the content service (and mirrored locally).
    Remote,
    /// Written to this browser only.
    LocalOnly,
}

impl SaveOutcome {
    pub fn from_remote(remote_ok: bool) -> Self {
        if remote_ok { Self::Remote } else { Self::LocalOnly }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Remote => "Saved.",
            Self::LocalOnly => "Saved in this browser. The content service is unreachable.",
        }
    }
}

/// Last known liveness of the content service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn from_health(alive: bool) -> Self {
        if alive { Self::Online } else { Self::Offline }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking content service...",
            Self::Online => "Content service online",
            Self::Offline => "Offline: changes stay in this browser",
        }
    }
}

/// UI state shared by the admin pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub admin_tab: AdminTab,
    pub last_save: Option<SaveOutcome>,
    /// Bumped per save so a stale notice timer does not clear a newer one.
    pub save_seq: u64,
    pub backend: BackendStatus,
    /// Artwork id awaiting delete confirmation.
    pub confirm_delete: Option<String>,
}

impl UiState {
    /// Record a save result and return its sequence number.
    pub fn record_save(&mut self, outcome: SaveOutcome) -> u64 {
        self.save_seq += 1;
        self.last_save = Some(outcome);
        self.save_seq
    }

    /// Clear the notice only if no newer save happened since `seq`.
    pub fn clear_save_notice(&mut self, seq: u64) {
        if self.save_seq == seq {
            self.last_save = None;
        }
    }
}

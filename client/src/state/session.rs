//! Session/Role Guard: the current identity and its permission checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one guard as `RwSignal<SessionGuard<BrowserStorage>>`,
//! starting anonymous and replaced by [`SessionGuard::restore`] once the
//! page has hydrated. Pages and
//! components read it to decide whether edit affordances are shown; the
//! login page calls [`SessionGuard::login`], the admin header calls
//! [`SessionGuard::logout`].
//!
//! TRUST BOUNDARY
//! ==============
//! There is none. Credentials are a fixed two-entry table compiled into the
//! client and the role flags only gate what the UI renders. Anything that
//! needs real authorization must add a server-side check.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, BrowserStorage, KeyValueStore, USER_KEY};

/// Role attached to a session at login.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Fixed capability set for the role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Admin => &[Permission::EditHomepage, Permission::EditArtworks, Permission::ManageUsers],
            Self::Editor => &[Permission::EditHomepage, Permission::EditArtworks],
            Self::Viewer => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

/// Capability tags handed out by [`Role::permissions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    EditHomepage,
    EditArtworks,
    ManageUsers,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EditHomepage => "edit_homepage",
            Self::EditArtworks => "edit_artworks",
            Self::ManageUsers => "manage_users",
        }
    }
}

/// Identity stored for an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Copied from the role at login; never granted independently.
    pub permissions: Vec<String>,
}

impl User {
    fn for_role(id: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            permissions: permission_names(role),
        }
    }
}

fn permission_names(role: Role) -> Vec<String> {
    role.permissions().iter().map(|p| p.as_str().to_owned()).collect()
}

/// Login rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

struct Credential {
    email: &'static str,
    password: &'static str,
    id: &'static str,
    name: &'static str,
    role: Role,
}

const CREDENTIALS: &[Credential] = &[
    Credential {
        email: "admin@scribbledcanvas.com",
        password: "admin123",
        id: "1",
        name: "Admin User",
        role: Role::Admin,
    },
    Credential {
        email: "editor@scribbledcanvas.com",
        password: "editor123",
        id: "2",
        name: "Editor User",
        role: Role::Editor,
    },
];

/// The guard as provided to the browser app.
pub type BrowserSession = SessionGuard<BrowserStorage>;

/// Current session plus the storage it is mirrored to.
///
/// Two states: anonymous (`current_user() == None`) and authenticated.
#[derive(Clone, Debug)]
pub struct SessionGuard<S> {
    storage: S,
    user: Option<User>,
}

impl<S: KeyValueStore> SessionGuard<S> {
    /// Guard with no user that has not looked at storage yet.
    pub fn anonymous(storage: S) -> Self {
        Self { storage, user: None }
    }

    /// Rehydrate from storage. A stored value that does not parse is removed
    /// and the guard starts anonymous. Stored permissions are ignored and
    /// rebuilt from the stored role.
    pub fn restore(storage: S) -> Self {
        let user = match storage::load_json::<User>(&storage, USER_KEY) {
            None => None,
            Some(Ok(mut user)) => {
                user.permissions = permission_names(user.role);
                Some(user)
            }
            Some(Err(e)) => {
                log::warn!("discarding unreadable saved session: {e}");
                storage.remove(USER_KEY);
                None
            }
        };
        Self { storage, user }
    }

    /// Check `email`/`password` against the fixed credential table (exact
    /// match, no trimming) and start a session on match. On failure the current session is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidCredentials`] when no entry matches.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, LoginError> {
        let entry = CREDENTIALS
            .iter()
            .find(|c| c.email == email && c.password == password)
            .ok_or(LoginError::InvalidCredentials)?;
        let user = User::for_role(entry.id, entry.name, entry.email, entry.role);
        if let Err(e) = storage::save_json(&self.storage, USER_KEY, &user) {
            log::warn!("session not persisted: {e}");
        }
        log::info!("signed in as {} ({})", user.email, user.role.as_str());
        Ok(self.user.insert(user))
    }

    /// End the session and drop its stored copy.
    pub fn logout(&mut self) {
        self.user = None;
        self.storage.remove(USER_KEY);
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the session holds `name`. Always false when anonymous.
    pub fn check_permission(&self, name: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.permissions.iter().any(|p| p == name))
    }

    /// Typed form of [`Self::check_permission`].
    pub fn has(&self, permission: Permission) -> bool {
        self.check_permission(permission.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn can_edit(&self) -> bool {
        matches!(self.role(), Some(Role::Admin | Role::Editor))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

use super::*;
use crate::util::storage::MemoryStorage;

fn anonymous() -> SessionGuard<MemoryStorage> {
    SessionGuard::restore(MemoryStorage::new())
}

// =============================================================
// Role table
// =============================================================

#[test]
fn role_permissions_are_fixed() {
    assert_eq!(
        Role::Admin.permissions(),
        &[Permission::EditHomepage, Permission::EditArtworks, Permission::ManageUsers]
    );
    assert_eq!(Role::Editor.permissions(), &[Permission::EditHomepage, Permission::EditArtworks]);
    assert!(Role::Viewer.permissions().is_empty());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"editor\"");
    assert_eq!(serde_json::from_str::<Role>("\"viewer\"").unwrap(), Role::Viewer);
}

#[test]
fn permission_tags_match_wire_names() {
    assert_eq!(Permission::EditHomepage.as_str(), "edit_homepage");
    assert_eq!(Permission::EditArtworks.as_str(), "edit_artworks");
    assert_eq!(Permission::ManageUsers.as_str(), "manage_users");
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn admin_login_grants_full_permissions() {
    let mut guard = anonymous();
    let user = guard.login("admin@scribbledcanvas.com", "admin123").unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, "Admin User");
    assert!(guard.can_edit());
    assert!(guard.is_admin());
    assert!(guard.check_permission("manage_users"));
    assert!(guard.has(Permission::EditArtworks));
}

#[test]
fn editor_login_can_edit_but_not_manage_users() {
    let mut guard = anonymous();
    guard.login("editor@scribbledcanvas.com", "editor123").unwrap();
    assert!(guard.can_edit());
    assert!(!guard.is_admin());
    assert!(guard.check_permission("edit_homepage"));
    assert!(guard.check_permission("edit_artworks"));
    assert!(!guard.check_permission("manage_users"));
}

#[test]
fn login_rejects_padded_email() {
    let mut guard = anonymous();
    assert_eq!(guard.login(" editor@scribbledcanvas.com", "editor123"), Err(LoginError::InvalidCredentials));
    assert_eq!(guard.login("editor@scribbledcanvas.com ", "editor123"), Err(LoginError::InvalidCredentials));
    assert!(!guard.is_authenticated());
}

#[test]
fn login_rejects_other_pairs() {
    let mut guard = anonymous();
    let cases = [
        ("admin@scribbledcanvas.com", "editor123"),
        ("editor@scribbledcanvas.com", "admin123"),
        ("someone@example.com", "admin123"),
        ("admin@scribbledcanvas.com", ""),
        ("", ""),
        ("ADMIN@scribbledcanvas.com", "admin123"),
    ];
    for (email, password) in cases {
        assert_eq!(guard.login(email, password), Err(LoginError::InvalidCredentials));
        assert!(guard.current_user().is_none());
    }
}

#[test]
fn failed_login_leaves_existing_session_unchanged() {
    let mut guard = anonymous();
    guard.login("editor@scribbledcanvas.com", "editor123").unwrap();
    assert!(guard.login("admin@scribbledcanvas.com", "wrong").is_err());
    assert_eq!(guard.role(), Some(Role::Editor));
}

#[test]
fn login_mirrors_user_to_storage() {
    let storage = MemoryStorage::new();
    let mut guard = SessionGuard::restore(storage.clone());
    guard.login("admin@scribbledcanvas.com", "admin123").unwrap();
    let saved: User = storage::load_json(&storage, USER_KEY).unwrap().unwrap();
    assert_eq!(Some(&saved), guard.current_user());
}

#[test]
fn logout_clears_session_and_storage() {
    let storage = MemoryStorage::new();
    let mut guard = SessionGuard::restore(storage.clone());
    guard.login("admin@scribbledcanvas.com", "admin123").unwrap();
    guard.logout();
    assert!(!guard.is_authenticated());
    assert!(!guard.can_edit());
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// Anonymous checks
// =============================================================

#[test]
fn anonymous_session_has_no_permissions() {
    let guard = anonymous();
    for name in ["edit_homepage", "edit_artworks", "manage_users", "", "anything"] {
        assert!(!guard.check_permission(name));
    }
    assert!(!guard.is_admin());
    assert!(!guard.can_edit());
    assert_eq!(guard.role(), None);
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn restore_rehydrates_saved_user() {
    let storage = MemoryStorage::new();
    SessionGuard::restore(storage.clone())
        .login("editor@scribbledcanvas.com", "editor123")
        .unwrap();
    let guard = SessionGuard::restore(storage);
    assert_eq!(guard.role(), Some(Role::Editor));
    assert!(guard.can_edit());
}

#[test]
fn restore_discards_unparseable_session() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, "{\"id\":").unwrap();
    let guard = SessionGuard::restore(storage.clone());
    assert!(!guard.is_authenticated());
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn restore_discards_unknown_role() {
    let storage = MemoryStorage::new();
    storage
        .set(USER_KEY, r#"{"id":"9","name":"X","email":"x@y","role":"owner","permissions":[]}"#)
        .unwrap();
    let guard = SessionGuard::restore(storage.clone());
    assert!(guard.current_user().is_none());
    assert!(storage.is_empty());
}

#[test]
fn viewer_session_cannot_edit() {
    let storage = MemoryStorage::new();
    storage
        .set(USER_KEY, r#"{"id":"3","name":"V","email":"v@y","role":"viewer","permissions":[]}"#)
        .unwrap();
    let guard = SessionGuard::restore(storage);
    assert!(guard.is_authenticated());
    assert!(!guard.can_edit());
    assert!(!guard.check_permission("edit_homepage"));
}

#[test]
fn anonymous_guard_ignores_saved_session() {
    let storage = MemoryStorage::new();
    SessionGuard::restore(storage.clone()).login("editor@scribbledcanvas.com", "editor123").unwrap();
    let guard = SessionGuard::anonymous(storage.clone());
    assert!(!guard.is_authenticated());
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn restore_rebuilds_permissions_from_role() {
    let storage = MemoryStorage::new();
    storage
        .set(
            USER_KEY,
            r#"{"id":"2","name":"E","email":"e@y","role":"editor","permissions":["edit_homepage","edit_artworks","manage_users"]}"#,
        )
        .unwrap();
    let guard = SessionGuard::restore(storage);
    assert!(!guard.check_permission("manage_users"));
    assert!(!guard.has(Permission::ManageUsers));
    assert!(guard.has(Permission::EditArtworks));
    assert_eq!(guard.current_user().unwrap().permissions, ["edit_homepage", "edit_artworks"]);
}

#[test]
fn restore_fills_missing_permissions_from_role() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, r#"{"id":"1","name":"A","email":"a@y","role":"admin","permissions":[]}"#).unwrap();
    let guard = SessionGuard::restore(storage);
    assert!(guard.has(Permission::ManageUsers));
}

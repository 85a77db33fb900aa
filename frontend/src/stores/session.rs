// Viewer identity, cached in LocalStorage between page loads

use gloo_storage::{LocalStorage, Storage};
use parlor_shared::User;

const VIEWER_STORAGE_KEY: &str = "parlor_viewer";

pub fn restore_viewer() -> Option<User> {
    LocalStorage::get(VIEWER_STORAGE_KEY).ok()
}

pub fn persist_viewer(user: &User) {
    if let Err(e) = LocalStorage::set(VIEWER_STORAGE_KEY, user) {
        tracing::warn!(error = %e, "failed to cache viewer");
    }
}

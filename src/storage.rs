//! The app's single durable value: whether onboarding has been seen.
//!
//! Storage can be unavailable (private browsing, storage disabled); in
//! that case reads report "not seen" and writes are dropped with a
//! warning, so every restart simply shows onboarding again.

use web_sys::{window, Storage};

const LS_ONBOARDING_SEEN: &str = "hasSeenOnboarding";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Read once at startup.
pub fn onboarding_seen() -> bool {
    let Some(ls) = local_storage() else { return false };
    matches!(ls.get_item(LS_ONBOARDING_SEEN), Ok(Some(v)) if v == "true")
}

/// Written exactly once, when the user finishes or skips onboarding.
pub fn mark_onboarding_seen() {
    match local_storage() {
        Some(ls) => {
            if ls.set_item(LS_ONBOARDING_SEEN, "true").is_err() {
                log::warn!("could not persist {LS_ONBOARDING_SEEN}; onboarding will show again next launch");
            }
        }
        None => {
            log::warn!("localStorage unavailable; onboarding will show again next launch");
        }
    }
}

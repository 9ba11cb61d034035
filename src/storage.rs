//! Browser local-storage shim for the theme preference and the
//! calculation history.
//!
//! Both values are overwritten wholesale on every update. A missing or
//! unreadable value degrades to the default with a warning, never a
//! panic: losing history must not take the form down with it.

use friction_engine::HistoryEntry;
use log::warn;
use web_sys::Storage;

const THEME_KEY: &str = "ff_theme";
const HISTORY_KEY: &str = "ff_history";

/// Color scheme applied as a class on the app root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_theme() -> Option<Theme> {
    let raw = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    match raw.as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        other => {
            warn!("ignoring unknown stored theme '{}'", other);
            None
        }
    }
}

pub fn save_theme(theme: Theme) {
    if let Some(store) = local_storage() {
        if store.set_item(THEME_KEY, theme.as_str()).is_err() {
            warn!("failed to persist theme preference");
        }
    }
}

pub fn load_history() -> Vec<HistoryEntry> {
    let raw = match local_storage().and_then(|s| s.get_item(HISTORY_KEY).ok().flatten()) {
        Some(raw) => raw,
        None => return Vec::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("discarding unreadable history: {}", err);
            Vec::new()
        }
    }
}

pub fn save_history(entries: &[HistoryEntry]) {
    let store = match local_storage() {
        Some(store) => store,
        None => return,
    };
    match serde_json::to_string(entries) {
        Ok(json) => {
            if store.set_item(HISTORY_KEY, &json).is_err() {
                warn!("failed to persist history");
            }
        }
        Err(err) => warn!("failed to serialize history: {}", err),
    }
}

pub fn clear_history() {
    if let Some(store) = local_storage() {
        let _ = store.remove_item(HISTORY_KEY);
    }
}

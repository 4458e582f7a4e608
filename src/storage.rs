//! Persistent Store Adapter
//!
//! Thin wrapper over `window.localStorage`. Loads degrade to the empty
//! default when storage is missing, inaccessible, or holds malformed
//! JSON; saves are fire-and-forget overwrites of the whole value.

use crate::collection::TodoCollection;
use crate::theme::Theme;

/// Key holding the JSON-serialized task array.
pub const TASKS_KEY: &str = "ITEMS";
/// Key holding the theme name.
pub const THEME_KEY: &str = "THEME";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn save_raw(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Parse a stored task array. Absent or malformed content yields an
/// empty collection.
pub fn decode_tasks(raw: Option<&str>) -> Result<TodoCollection, serde_json::Error> {
    match raw {
        Some(json) => serde_json::from_str(json),
        None => Ok(TodoCollection::default()),
    }
}

pub fn load_tasks() -> TodoCollection {
    match decode_tasks(load_raw(TASKS_KEY).as_deref()) {
        Ok(col) => col,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[storage] discarding malformed {}: {}", TASKS_KEY, err).into(),
            );
            TodoCollection::default()
        }
    }
}

pub fn save_tasks(todos: &TodoCollection) {
    if let Ok(json) = serde_json::to_string(todos) {
        save_raw(TASKS_KEY, &json);
    }
}

pub fn load_theme() -> Theme {
    load_raw(THEME_KEY)
        .map(|raw| Theme::parse_or_default(&raw))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    save_raw(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_absent_value_yields_empty_collection() {
        let col = decode_tasks(None).unwrap();
        assert!(col.is_empty());
    }

    #[test]
    fn decode_malformed_json_errors_without_panicking() {
        assert!(decode_tasks(Some("{not json")).is_err());
        assert!(decode_tasks(Some(r#"{"id":"x"}"#)).is_err());
    }

    #[test]
    fn decode_tolerates_missing_and_empty_dates() {
        let json = r#"[
            {"id":"1","title":"a","completed":false,"date":"2024-01-01"},
            {"id":"2","title":"b","completed":true,"date":""},
            {"id":"3","title":"c","completed":false}
        ]"#;
        let col = decode_tasks(Some(json)).unwrap();
        assert_eq!(col.len(), 3);
        assert_eq!(col.tasks()[1].date_key(), "No Date");
        assert_eq!(col.tasks()[2].date_key(), "No Date");
    }

    #[test]
    fn collection_round_trips_through_json() {
        let mut col = TodoCollection::default();
        col.add("Buy milk", Some("2024-01-01".into()));
        col.add("Walk dog", None);

        let json = serde_json::to_string(&col).unwrap();
        let back = decode_tasks(Some(&json)).unwrap();
        assert_eq!(back, col);
    }
}

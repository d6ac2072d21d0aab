//! Theme persistence and toggle marking against in-memory seams.

mod common;

use common::{RecordingThemeView, UnavailableStore};
use hue_core::{HueConfig, KeyValueStore, MemoryStore, Theme, ThemeManager};
use pretty_assertions::assert_eq;

const KEY: &str = "theme";

fn manager(store: MemoryStore) -> ThemeManager<MemoryStore, RecordingThemeView> {
    ThemeManager::new(store, RecordingThemeView::standard(), KEY, Theme::Dark)
}

#[test]
fn empty_storage_defaults_to_dark_without_light_class() {
    let mut themes = manager(MemoryStore::new());
    assert_eq!(themes.initialize(), Theme::Dark);
    assert!(!themes.view().light_class);
    assert_eq!(themes.view().selected(), vec![Some("dark")]);
}

#[test]
fn light_survives_reload_from_same_storage() {
    let mut themes = manager(MemoryStore::new());
    themes.initialize();
    themes.set_theme("light");
    assert!(themes.view().light_class);

    let (store, _) = themes.into_parts();
    assert_eq!(store.get(KEY), Ok(Some("light".to_string())));

    let mut reloaded = manager(store);
    assert_eq!(reloaded.initialize(), Theme::Light);
    assert!(reloaded.view().light_class);
    assert_eq!(reloaded.view().selected(), vec![Some("light")]);
}

#[test]
fn switching_back_to_dark_clears_light_class_and_moves_selection() {
    let mut themes = manager(MemoryStore::new().with_entry(KEY, "light"));
    themes.initialize();
    themes.set_theme("dark");
    assert_eq!(themes.theme(), Theme::Dark);
    assert!(!themes.view().light_class);
    assert_eq!(themes.view().selected(), vec![Some("dark")]);
    assert_eq!(themes.store().get(KEY), Ok(Some("dark".to_string())));
}

#[test]
fn unknown_theme_name_falls_back_to_dark_appearance() {
    let mut themes = manager(MemoryStore::new().with_entry(KEY, "light"));
    themes.initialize();
    themes.set_theme("sepia");
    assert_eq!(themes.theme(), Theme::Dark);
    assert!(!themes.view().light_class);
    assert_eq!(themes.store().get(KEY), Ok(Some("dark".to_string())));
}

#[test]
fn unrecognized_stored_value_uses_default() {
    let mut themes = manager(MemoryStore::new().with_entry(KEY, "LIGHT"));
    assert_eq!(themes.initialize(), Theme::Dark);
    assert!(!themes.view().light_class);
}

#[test]
fn every_matching_toggle_is_selected_and_others_cleared() {
    let view = RecordingThemeView::with_toggles(&[
        Some("dark"),
        Some("light"),
        None,
        Some("light"),
        Some("dark"),
    ]);
    let mut themes = ThemeManager::new(MemoryStore::new(), view, KEY, Theme::Dark);
    themes.initialize();
    themes.set_theme("light");

    let marks: Vec<bool> = themes.view().toggles.iter().map(|(_, s)| *s).collect();
    assert_eq!(marks, vec![false, true, false, true, false]);
}

#[test]
fn page_without_toggles_still_applies_class() {
    let view = RecordingThemeView::with_toggles(&[]);
    let mut themes = ThemeManager::new(MemoryStore::new(), view, KEY, Theme::Dark);
    themes.initialize();
    themes.set(Theme::Light);
    assert!(themes.view().light_class);
    assert!(themes.view().selected().is_empty());
}

#[test]
fn unavailable_storage_degrades_to_session_memory() {
    let mut themes = ThemeManager::new(
        UnavailableStore::default(),
        RecordingThemeView::standard(),
        KEY,
        Theme::Dark,
    );
    assert_eq!(themes.initialize(), Theme::Dark);

    themes.set_theme("light");
    assert_eq!(themes.theme(), Theme::Light);
    assert!(themes.view().light_class);
    assert_eq!(themes.view().selected(), vec![Some("light")]);
    assert_eq!(themes.store().write_attempts, 1);
}

#[test]
fn config_supplies_key_and_default() {
    let config = HueConfig::from_json_str(
        r#"{"theme_storage_key": "hue.theme", "default_theme": "light"}"#,
    )
    .unwrap();
    let mut themes =
        ThemeManager::from_config(&config, MemoryStore::new(), RecordingThemeView::standard());
    assert_eq!(themes.initialize(), Theme::Light);

    themes.set(Theme::Dark);
    assert_eq!(themes.store().get("hue.theme"), Ok(Some("dark".to_string())));
    assert_eq!(themes.store().get("theme"), Ok(None));
}

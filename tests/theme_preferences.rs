use arcade_calc_wasm::domain::theme::{
    PreferenceStore, THEME_STORAGE_KEY, Theme, load_theme, store_theme,
};
use arcade_calc_wasm::infrastructure::storage::InMemoryPreferences;

#[test]
fn empty_store_falls_back_to_arcade() {
    let store = InMemoryPreferences::new();
    assert_eq!(load_theme(&store), Theme::Arcade);
}

#[test]
fn unknown_stored_value_falls_back_to_arcade() {
    let store = InMemoryPreferences::new();
    store.set(THEME_STORAGE_KEY, "vaporwave");
    assert_eq!(load_theme(&store), Theme::Arcade);
}

#[test]
fn switched_theme_survives_a_reload() {
    let store = InMemoryPreferences::new();
    store_theme(&store, Theme::Matrix);
    assert_eq!(load_theme(&store), Theme::Matrix);
}

#[test]
fn full_cycle_persists_each_step() {
    let store = InMemoryPreferences::new();
    let mut theme = load_theme(&store);
    for expected in [Theme::Cyberpunk, Theme::Matrix, Theme::Arcade] {
        theme = theme.next();
        store_theme(&store, theme);
        assert_eq!(theme, expected);
        assert_eq!(load_theme(&store), expected);
    }
}

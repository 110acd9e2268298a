//! End-to-end checks of the settings export/import protocol through real
//! files, the way a user would round-trip a downloaded document.

use std::fs;

use galleria::theme::{
    EXPORT_FILE_NAME, SettingField, SettingValue, ThemeSettings, ThemeStore, parse_settings,
};
use tempfile::tempdir;

#[test]
fn export_file_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(EXPORT_FILE_NAME);

    let mut store = ThemeStore::new();
    store
        .update(SettingField::FontFamily, "Playfair Display".into())
        .expect("update");
    store
        .update(SettingField::BackgroundOpacity, SettingValue::Number(0.75))
        .expect("update");

    fs::write(&path, store.export_json().expect("export")).expect("write");

    let text = fs::read_to_string(&path).expect("read");
    let restored = parse_settings(&text).expect("parse");
    assert_eq!(&restored, store.settings());
}

#[test]
fn customize_export_reset_import_scenario() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(EXPORT_FILE_NAME);

    // Starting from defaults, recolor the primary accent.
    let mut store = ThemeStore::new();
    store
        .update(SettingField::PrimaryColor, "#00ff00".into())
        .expect("update");

    // Export the snapshot to disk.
    let snapshot = store.export_json().expect("export");
    fs::write(&path, &snapshot).expect("write");

    // Reset returns to the stock configuration.
    store.reset();
    assert_eq!(store.settings(), &ThemeSettings::default());
    assert_eq!(store.settings().primary_color, "#dc2626");

    // Importing the earlier export recovers the customized record exactly.
    let text = fs::read_to_string(&path).expect("read");
    assert!(store.import_json(&text));
    assert_eq!(store.settings().primary_color, "#00ff00");
    assert_eq!(store.export_json().expect("export"), snapshot);
}

#[test]
fn import_accepts_hand_trimmed_documents() {
    // A user deleting fields from the export by hand still gets a full
    // record back; untouched fields revert to defaults.
    let mut store = ThemeStore::new();
    assert!(store.import_json(
        r##"{
            "menuBackgroundColor": "#000000",
            "animationSpeed": 350
        }"##
    ));

    assert_eq!(store.settings().menu_background_color, "#000000");
    assert_eq!(store.settings().animation_speed, 350);
    assert_eq!(store.settings().font_family, "Inter");
}

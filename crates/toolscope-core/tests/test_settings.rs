use toolscope_core::consts::DEFAULT_CAMERA_URL;
use toolscope_core::settings::Settings;

#[test]
fn test_default_points_at_local_streamer() {
    let settings = Settings::default();
    assert_eq!(settings.camera, DEFAULT_CAMERA_URL);
    assert_eq!(settings.camera, "http://localhost:8080/?action=snapshot");
}

#[test]
fn test_toml_round_trip() {
    let mut settings = Settings::default();
    settings.camera = "http://printer.local:8081/?action=snapshot".to_string();

    let text = toml::to_string(&settings).expect("serialize settings");
    let parsed: Settings = toml::from_str(&text).expect("parse settings");

    assert_eq!(parsed.camera, settings.camera);
}

#[test]
fn test_empty_file_yields_defaults() {
    let parsed: Settings = toml::from_str("").expect("empty settings file");
    assert_eq!(parsed.camera, DEFAULT_CAMERA_URL);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let text = "camera = \"http://cam.local/snap\"\nlegacy_option = 3\n";
    let parsed: Settings = toml::from_str(text).expect("settings with stray key");
    assert_eq!(parsed.camera, "http://cam.local/snap");
}

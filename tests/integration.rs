// SPDX-License-Identifier: MPL-2.0
use dotshow::config::{self, Config, DEFAULT_TRANSITION_DELAY_MS};
use dotshow::deck::Deck;
use dotshow::i18n::fluent::I18n;
use dotshow::render::graphviz;
use dotshow::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        transition_delay_ms: Some(DEFAULT_TRANSITION_DELAY_MS),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
        transition_delay_ms: Some(DEFAULT_TRANSITION_DELAY_MS),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_directory_deck_renders_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");

    std::fs::write(dir.path().join("01-start.dot"), "digraph { a -> b; }")
        .expect("Failed to write first diagram");
    std::fs::write(dir.path().join("02-step.gv"), "digraph { b -> c; }")
        .expect("Failed to write second diagram");
    std::fs::write(dir.path().join("notes.txt"), "not a diagram")
        .expect("Failed to write unrelated file");

    let deck = Deck::load(dir.path()).expect("Failed to load deck from directory");
    assert_eq!(deck.len(), 2);

    for index in 0..deck.len() {
        let source = deck.get(index).expect("index within deck");
        graphviz::render(source).expect("diagram should render");
    }

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_json_deck_loads_in_order() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let deck_path = dir.path().join("deck.json");

    std::fs::write(
        &deck_path,
        r#"["digraph { a; }", "digraph { a -> b; }", "digraph { a -> b -> c; }"]"#,
    )
    .expect("Failed to write deck file");

    let deck = Deck::load(&deck_path).expect("Failed to load JSON deck");
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.get(0), Some("digraph { a; }"));
    assert_eq!(deck.get(2), Some("digraph { a -> b -> c; }"));

    dir.close().expect("Failed to close temporary directory");
}

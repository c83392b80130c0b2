// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::cart::CartLedger;
use iced_vitrine::catalog::Catalog;
use iced_vitrine::config::{self, Config};
use iced_vitrine::gallery::{Direction, GalleryNavigator, Transition};
use iced_vitrine::i18n::fluent::I18n;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn gallery_and_cart_cover_a_full_shopping_pass() {
    // Walk the whole gallery forward once, with the transition settling
    // each step, then buy three pairs and clear the cart again.
    let catalog = Catalog::default();
    let mut gallery = GalleryNavigator::new(catalog.image_count());
    let mut transition = Transition::new();

    for step in 1..=catalog.image_count() {
        let start = Instant::now();
        let from = gallery.current();
        let to = gallery.peek_next();
        transition.start(from, to, Direction::Forward, start);

        let committed = transition
            .settle(start + Duration::from_millis(config::TRANSITION_SETTLE_MS))
            .expect("transition settles after the delay");
        gallery.select(committed);

        assert_eq!(gallery.current(), step % catalog.image_count());
    }
    // A full lap lands back on the first image.
    assert_eq!(gallery.current(), 0);

    let mut ledger = CartLedger::new();
    ledger.add_items(catalog.product(), 2);
    ledger.add_items(catalog.product(), 1);

    assert_eq!(ledger.items().len(), 1);
    assert_eq!(ledger.total_quantity(), 3);
    assert_eq!(ledger.total_price().to_string(), "$375.00");

    ledger.remove_item(&catalog.product().name);
    assert!(ledger.is_empty());
}

use std::collections::HashMap;
use wpenv::config::{AuthKey, Config};
use wpenv::render::{to_wp_config, write_wp_config};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn minimal() -> Config {
    Config::load(&env(&[
        ("NAME_DATABASE", "wp"),
        ("USERNAME_DATABASE", "u"),
        ("PASSWORD_DATABASE", "p"),
        ("WP_URL", "https://blog.example.test"),
    ]))
    .unwrap()
}

#[test]
fn renders_database_settings() {
    let php = to_wp_config(&minimal());

    assert!(php.starts_with("<?php\n"));
    assert!(php.contains("define( 'DB_NAME', 'wp' );"));
    assert!(php.contains("define( 'DB_USER', 'u' );"));
    assert!(php.contains("define( 'DB_PASSWORD', 'p' );"));
    assert!(php.contains("define( 'DB_HOST', 'mariadb' );"));
    assert!(php.contains("define( 'DB_CHARSET', 'utf8' );"));
    assert!(php.contains("define( 'DB_COLLATE', '' );"));
    assert!(php.contains("$table_prefix = 'wp_';"));
    assert!(php.contains("define( 'WP_DEBUG', false );"));
}

#[test]
fn home_and_siteurl_share_the_site_url() {
    let php = to_wp_config(&minimal());

    assert!(php.contains("define( 'WP_HOME', 'https://blog.example.test' );"));
    assert!(php.contains("define( 'WP_SITEURL', 'https://blog.example.test' );"));
}

#[test]
fn renders_every_auth_key_in_order() {
    let php = to_wp_config(&minimal());

    let mut last = 0;
    for key in AuthKey::ALL {
        let line = format!("define( '{}', 'put-unique-phrase-here' );", key.name());
        let pos = php.find(&line).unwrap_or_else(|| panic!("missing {line}"));
        assert!(pos >= last, "{} out of order", key.name());
        last = pos;
    }
}

#[test]
fn ends_with_bootstrap() {
    let php = to_wp_config(&minimal());

    assert!(php.contains("if ( ! defined( 'ABSPATH' ) ) {"));
    assert!(php.trim_end().ends_with("require_once ABSPATH . 'wp-settings.php';"));
}

#[test]
fn escapes_quotes_and_backslashes_in_values() {
    let config = Config::load(&env(&[
        ("NAME_DATABASE", "wp"),
        ("USERNAME_DATABASE", "u"),
        ("PASSWORD_DATABASE", r"pa'ss\word"),
        ("WP_URL", "http://x"),
        ("NONCE_SALT", r"'); system('id'); //"),
    ]))
    .unwrap();

    let php = to_wp_config(&config);
    assert!(php.contains(r"define( 'DB_PASSWORD', 'pa\'ss\\word' );"));
    assert!(php.contains(r"define( 'NONCE_SALT', '\'); system(\'id\'); //' );"));
}

#[test]
fn writer_and_string_agree() {
    let config = minimal();
    let mut buf = Vec::new();
    write_wp_config(&config, &mut buf).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), to_wp_config(&config));
}

#[test]
fn writes_to_a_file() {
    let dir = std::env::temp_dir().join(format!("wpenv-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wp-config.php");

    let config = minimal();
    let file = std::fs::File::create(&path).unwrap();
    write_wp_config(&config, std::io::BufWriter::new(file)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_wp_config(&config));

    std::fs::remove_dir_all(&dir).ok();
}

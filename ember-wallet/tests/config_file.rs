use std::path::PathBuf;

use ember_wallet::config::WalletConfig;
use ember_wallet::errors::WalletError;
use tempfile::tempdir;

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");

    let config = WalletConfig {
        address_length: 32,
        accounts_path: Some(PathBuf::from("accounts.json")),
    };
    config.save_to_file(&path).unwrap();

    let loaded = WalletConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = tempdir().unwrap();
    let result = WalletConfig::load_from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(WalletError::Io(_))));
}

#[test]
fn test_invalid_config_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    std::fs::write(&path, r#"{"address_length":"twenty"}"#).unwrap();
    assert!(matches!(WalletConfig::load_from_file(&path), Err(WalletError::Json(_))));
}

use ember_common::account::AccountInfo;
use ember_common::address::{is_valid_address, ETH_ADDRESS_LENGTH};
use ember_wallet::accounts::find_hardware_account_info;
use ember_wallet::config::load_accounts;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

const LEDGER: &str = "0x4F9b2A3c5d6E7f8091a2B3c4D5e6F708192a3B4c";
const SOFTWARE: &str = "0x1111111111111111111111111111111111111111";

fn accounts_file() -> NamedTempFile {
    let accounts = json!([
        { "address": SOFTWARE, "name": "Account 1", "hardware": false },
        { "address": LEDGER, "name": "Ledger 1", "hardware": true },
        { "address": LEDGER, "name": "Ledger 1 (duplicate)", "hardware": true },
        { "address": SOFTWARE, "name": "Imported" }
    ]);

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", accounts).unwrap();
    file
}

#[test]
fn test_lookup_over_loaded_accounts() {
    let file = accounts_file();
    let accounts = load_accounts(file.path()).unwrap();
    assert_eq!(accounts.len(), 4);

    let found = find_hardware_account_info(&accounts, LEDGER).unwrap();
    assert_eq!(found.name, "Ledger 1");

    assert!(find_hardware_account_info(&accounts, SOFTWARE).is_none());
}

#[test]
fn test_validate_then_lookup() {
    let file = accounts_file();
    let accounts = load_accounts(file.path()).unwrap();

    let input = LEDGER.to_string();
    assert!(is_valid_address(&input, ETH_ADDRESS_LENGTH));
    assert!(find_hardware_account_info(&accounts, &input).is_some());

    // Lowercasing keeps it valid hex but breaks the exact match.
    let lowered = input.to_lowercase();
    assert!(is_valid_address(&lowered, ETH_ADDRESS_LENGTH));
    assert!(find_hardware_account_info(&accounts, &lowered).is_none());
}

#[test]
fn test_load_accounts_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not an array").unwrap();
    assert!(load_accounts(file.path()).is_err());
}

#[test]
fn test_find_on_plain_slice() {
    let accounts = [
        AccountInfo::new("0xAA", "", false),
        AccountInfo::new("0xBB", "first", true),
        AccountInfo::new("0xBB", "second", true),
    ];
    let found = find_hardware_account_info(&accounts, "0xBB").unwrap();
    assert_eq!(found.name, "first");
}

use ember_common::account::AccountRecord;
use tracing::trace;

/// Returns the first hardware account whose address equals `address`.
///
/// Addresses are compared exactly, without case folding; callers normalize
/// beforehand if they need to. Software accounts never match.
pub fn find_hardware_account_info<'a, T: AccountRecord>(
    accounts: &'a [T],
    address: &str,
) -> Option<&'a T> {
    let found = accounts
        .iter()
        .filter(|account| account.is_hardware())
        .find(|account| account.address() == address);

    match found {
        Some(_) => trace!(address, "hardware account found"),
        None => trace!(address, scanned = accounts.len(), "no hardware account for address"),
    }

    found
}

/// Hardware accounts in input order.
pub fn hardware_accounts<T: AccountRecord>(accounts: &[T]) -> impl Iterator<Item = &T> {
    accounts.iter().filter(|account| account.is_hardware())
}

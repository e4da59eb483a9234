pub mod lookup;

pub use lookup::{find_hardware_account_info, hardware_accounts};

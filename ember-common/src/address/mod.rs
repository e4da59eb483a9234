pub mod errors;
pub mod hex_address;

pub use errors::AddressError;
pub use hex_address::{
    is_valid_address, validate_address, HexAddress, ETH_ADDRESS_LENGTH, HEX_PREFIX,
};

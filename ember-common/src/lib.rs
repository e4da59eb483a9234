//! Shared wallet data model: hex address validation and account records.

pub mod account;
pub mod address;

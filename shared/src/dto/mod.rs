//! Data Transfer Objects for the injected wallet provider

pub mod wallet;

pub use wallet::*;

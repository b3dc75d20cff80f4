//! Wallet services: provider bindings and the connection controller

pub mod connection;
pub mod wallet;

#[cfg(test)]
pub(crate) mod mock;

pub use connection::{ConnectionController, WalletView};
pub use wallet::{locate, locate_injected, PhantomProvider, WalletProvider};

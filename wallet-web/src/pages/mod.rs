//! Page modules

pub mod connect;

pub use connect::ConnectPage;

//! # Shared Wallet Types
//!
//! Target-independent pieces of the Phantom connect helper. Nothing here touches
//! the browser, so everything is testable natively.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data exchanged with the injected wallet provider
//!   - **[`dto::wallet`]**: Connect options and provider events
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::shorten_address`]**: Format wallet addresses for display
//!
//! ## Wire Format
//!
//! DTOs that cross into JavaScript serialize with `serde` using the
//! provider's camelCase field names (`onlyIfTrusted`).

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;

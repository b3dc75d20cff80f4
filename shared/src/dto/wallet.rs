//! # Wallet Provider DTOs
//!
//! Shapes of the values passed to and received from the provider object the
//! wallet extension injects into the page.

use serde::{Deserialize, Serialize};

/// Options for the provider's `connect(opts)` call.
///
/// With `only_if_trusted` set, the extension resolves silently when the site was
/// approved before and rejects otherwise, without opening a popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    pub only_if_trusted: bool,
}

impl ConnectOptions {
    /// Options for a user-initiated connect (may prompt).
    pub fn interactive() -> Self {
        Self { only_if_trusted: false }
    }

    /// Options for a silent reconnect to a previously approved site.
    pub fn trusted() -> Self {
        Self { only_if_trusted: true }
    }
}

/// Events the provider emits through `on(event, handler)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The extension reports a connection to the given account.
    Connect(String),
    /// The extension dropped the session.
    Disconnect,
    /// The active account changed. `None` means the new account has not approved this site.
    AccountChanged(Option<String>),
}

impl ProviderEvent {
    /// JavaScript event names to subscribe to, in `on(name, ..)` form.
    pub const NAMES: [&'static str; 3] = ["connect", "disconnect", "accountChanged"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_constructors() {
        assert!(!ConnectOptions::interactive().only_if_trusted);
        assert!(ConnectOptions::trusted().only_if_trusted);
        assert_eq!(ConnectOptions::default(), ConnectOptions::interactive());
    }
}

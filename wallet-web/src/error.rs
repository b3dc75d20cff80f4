//! # Wallet Errors
//!
//! Error type shared by the provider bindings and the connection controller.
//!
//! ## Error Categories
//!
//! - **Precondition**: [`ProviderMissing`](WalletError::ProviderMissing),
//!   [`NotConnected`](WalletError::NotConnected), raised before the provider is touched
//! - **Ordering**: [`Superseded`](WalletError::Superseded), a connect that resolved
//!   after a newer one was issued
//! - **Provider**: [`Rejected`](WalletError::Rejected),
//!   [`InvalidResponse`](WalletError::InvalidResponse), [`Js`](WalletError::Js),
//!   raised by the extension or by decoding what it returned

use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Convenience alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet operation errors
///
/// None of these are fatal. The connection state is left as it was whenever an
/// operation returns one of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No Phantom provider was located on the page
    #[error("Phantom wallet not found")]
    ProviderMissing,

    /// A later connect was issued before this one resolved; its result was dropped
    #[error("Connect request superseded by a later one")]
    Superseded,

    /// Disconnect requested without an active connection
    #[error("Wallet is not connected")]
    NotConnected,

    /// The user or the extension refused the request (4xxx codes, 4001 is a user rejection)
    #[error("Request rejected ({code}): {message}")]
    Rejected { code: i64, message: String },

    /// The provider resolved with something other than what it promised
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Any other value thrown by the provider
    #[error("Provider error: {0}")]
    Js(String),
}

/// Error codes in this range are user or permission refusals (4001 is
/// "User rejected the request.").
const REJECTION_CODES: std::ops::RangeInclusive<i64> = 4000..=4999;

impl WalletError {
    /// Convert a thrown JavaScript value.
    ///
    /// Phantom rejects with `{ code, message }` objects; anything else keeps
    /// whatever text it carries.
    pub fn from_js(value: JsValue) -> Self {
        let code = Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64());
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string());
        let raw = value.as_string().unwrap_or_else(|| format!("{:?}", value));

        Self::from_parts(code.map(|code| code as i64), message, raw)
    }

    /// Classify the `code` and `message` fields read off a thrown value.
    ///
    /// `raw` is the value's own text, used when there is no message.
    pub fn from_parts(code: Option<i64>, message: Option<String>, raw: String) -> Self {
        match (code, message) {
            (Some(code), message) if REJECTION_CODES.contains(&code) => WalletError::Rejected {
                code,
                message: message.unwrap_or_default(),
            },
            (Some(code), message) => {
                WalletError::Js(format!("{} (code {})", message.unwrap_or(raw), code))
            }
            (None, Some(message)) => WalletError::Js(message),
            (None, None) => WalletError::Js(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WalletError::Rejected {
            code: 4001,
            message: "User rejected the request.".to_string(),
        };
        assert_eq!(err.to_string(), "Request rejected (4001): User rejected the request.");
        assert_eq!(WalletError::ProviderMissing.to_string(), "Phantom wallet not found");
        assert_eq!(WalletError::NotConnected.to_string(), "Wallet is not connected");
    }

    #[test]
    fn test_from_parts_user_rejection() {
        let err = WalletError::from_parts(
            Some(4001),
            Some("User rejected the request.".to_string()),
            "[object Object]".to_string(),
        );
        assert_eq!(
            err,
            WalletError::Rejected {
                code: 4001,
                message: "User rejected the request.".to_string()
            }
        );
    }

    #[test]
    fn test_from_parts_permission_code_is_rejection() {
        let err = WalletError::from_parts(Some(4100), None, String::new());
        assert_eq!(err, WalletError::Rejected { code: 4100, message: String::new() });
    }

    #[test]
    fn test_from_parts_internal_error_is_not_rejection() {
        let err = WalletError::from_parts(
            Some(-32603),
            Some("Internal JSON-RPC error.".to_string()),
            "[object Object]".to_string(),
        );
        assert_eq!(err, WalletError::Js("Internal JSON-RPC error. (code -32603)".to_string()));
        assert_eq!(err.to_string(), "Provider error: Internal JSON-RPC error. (code -32603)");
    }

    #[test]
    fn test_from_parts_without_code() {
        let err = WalletError::from_parts(None, Some("Wallet locked".to_string()), "x".to_string());
        assert_eq!(err, WalletError::Js("Wallet locked".to_string()));

        let err = WalletError::from_parts(None, None, "plain failure".to_string());
        assert_eq!(err, WalletError::Js("plain failure".to_string()));
    }
}

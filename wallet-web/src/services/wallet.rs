//! Phantom Wallet Integration via wasm-bindgen
//!
//! The extension injects a provider object into the page (`window.solana`).
//! This module binds that object, wraps it behind the [`WalletProvider`] trait
//! and locates it at startup.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use shared::dto::wallet::{ConnectOptions, ProviderEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::WalletError;

/// Operations the page needs from an injected wallet.
///
/// Implemented by [`PhantomProvider`] in the browser and by mocks in tests.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Capability flag the extension uses to identify itself
    fn is_phantom(&self) -> bool;

    /// Informational connection flag kept by the extension
    fn is_connected(&self) -> bool;

    /// Ask the extension to connect, resolving to the account address
    async fn connect(&self, options: ConnectOptions) -> Result<String, WalletError>;

    /// Ask the extension to drop the connection
    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Register a handler for extension-originated events
    fn subscribe(&self, handler: Rc<dyn Fn(ProviderEvent)>);
}

// ============================================================================
// PHANTOM BINDINGS
// ============================================================================

#[wasm_bindgen]
extern "C" {
    /// Provider object injected by the Phantom extension
    #[derive(Clone, Debug)]
    pub type SolanaProvider;

    #[wasm_bindgen(method, getter = isPhantom)]
    fn is_phantom(this: &SolanaProvider) -> Option<bool>;

    #[wasm_bindgen(method, getter = isConnected)]
    fn is_connected(this: &SolanaProvider) -> Option<bool>;

    #[wasm_bindgen(method, catch)]
    fn connect(this: &SolanaProvider, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn disconnect(this: &SolanaProvider) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &SolanaProvider, event: &str, handler: &Function);
}

/// Stringify a `PublicKey` object (or a plain string) handed out by the provider.
fn public_key_string(value: &JsValue) -> Option<String> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value
        .as_string()
        .or_else(|| Some(String::from(value.unchecked_ref::<Object>().to_string())))
}

/// Map a provider event name and its stringified key payload to a [`ProviderEvent`].
fn decode_event(name: &str, key: Option<String>) -> Option<ProviderEvent> {
    match name {
        "connect" => key.map(ProviderEvent::Connect),
        "disconnect" => Some(ProviderEvent::Disconnect),
        "accountChanged" => Some(ProviderEvent::AccountChanged(key)),
        _ => None,
    }
}

/// [`WalletProvider`] backed by the injected Phantom object.
#[derive(Clone, Debug)]
pub struct PhantomProvider {
    inner: SolanaProvider,
}

impl PhantomProvider {
    pub fn new(inner: SolanaProvider) -> Self {
        Self { inner }
    }
}

#[async_trait(?Send)]
impl WalletProvider for PhantomProvider {
    fn is_phantom(&self) -> bool {
        self.inner.is_phantom().unwrap_or(false)
    }

    fn is_connected(&self) -> bool {
        self.inner.is_connected().unwrap_or(false)
    }

    async fn connect(&self, options: ConnectOptions) -> Result<String, WalletError> {
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| WalletError::Js(e.to_string()))?;
        let promise = self.inner.connect(&options).map_err(WalletError::from_js)?;
        let response = JsFuture::from(promise).await.map_err(WalletError::from_js)?;

        let public_key = Reflect::get(&response, &JsValue::from_str("publicKey"))
            .map_err(WalletError::from_js)?;
        public_key_string(&public_key)
            .ok_or_else(|| WalletError::InvalidResponse("connect resolved without a publicKey".to_string()))
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        let promise = self.inner.disconnect().map_err(WalletError::from_js)?;
        JsFuture::from(promise).await.map_err(WalletError::from_js)?;
        Ok(())
    }

    fn subscribe(&self, handler: Rc<dyn Fn(ProviderEvent)>) {
        for name in ProviderEvent::NAMES {
            let handler = handler.clone();
            let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
                match decode_event(name, public_key_string(&payload)) {
                    Some(event) => handler(event),
                    None => log::debug!("Ignoring malformed '{}' event", name),
                }
            });
            self.inner.on(name, callback.as_ref().unchecked_ref());
            // The extension holds the handler for the lifetime of the page
            callback.forget();
        }
    }
}

// ============================================================================
// PROVIDER LOCATOR
// ============================================================================

/// Keep a candidate provider only if it identifies as Phantom.
pub fn locate<P: WalletProvider>(candidate: Option<P>) -> Option<P> {
    candidate.filter(|provider| provider.is_phantom())
}

/// One-time lookup of the provider injected under `window[key]`.
pub fn locate_injected(key: &str) -> Option<PhantomProvider> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(key)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    locate(Some(PhantomProvider::new(value.unchecked_into())))
}

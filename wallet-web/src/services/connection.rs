//! # Connection Controller
//!
//! Owns the located provider and the account address. The address is the only
//! connection state: empty means disconnected.
//!
//! The address is written only here, on a successful connect (set), a
//! successful disconnect (cleared), or an extension event that reports one of
//! those outcomes. Failed requests leave it untouched and hand the error back
//! to the caller.
//!
//! Only the most recently issued connect may set the address. A connect that
//! resolves after a newer one was issued returns [`WalletError::Superseded`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use shared::dto::wallet::{ConnectOptions, ProviderEvent};
use shared::utils::shorten_address;

use crate::error::{Result, WalletError};
use crate::services::wallet::WalletProvider;

/// What the page shows for the current provider and address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletView {
    /// No provider: ask the user to install the extension
    InstallPrompt,
    /// Provider present, not connected
    ConnectControl,
    /// Connected; carries the shortened address
    ConnectedDetails { short_address: String },
}

pub struct ConnectionController<P> {
    provider: Option<P>,
    address: RefCell<String>,
    /// Bumped each time a connect is issued
    connect_seq: Cell<u64>,
}

impl<P: WalletProvider + 'static> ConnectionController<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            address: RefCell::new(String::new()),
            connect_seq: Cell::new(0),
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn address(&self) -> String {
        self.address.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        !self.address.borrow().is_empty()
    }

    pub fn view(&self) -> WalletView {
        if !self.has_provider() {
            return WalletView::InstallPrompt;
        }
        let address = self.address.borrow();
        if address.is_empty() {
            WalletView::ConnectControl
        } else {
            WalletView::ConnectedDetails {
                short_address: shorten_address(&address),
            }
        }
    }

    /// User-initiated connect. The extension may prompt.
    pub async fn connect(&self) -> Result<String> {
        self.request_connect(ConnectOptions::interactive()).await
    }

    /// Silent connect that only succeeds for a site the user approved before.
    pub async fn reconnect_trusted(&self) -> Result<String> {
        self.request_connect(ConnectOptions::trusted()).await
    }

    async fn request_connect(&self, options: ConnectOptions) -> Result<String> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;
        let seq = self.connect_seq.get() + 1;
        self.connect_seq.set(seq);

        let outcome = provider.connect(options).await;
        if self.connect_seq.get() != seq {
            log::debug!("Dropping connect result superseded by a later request");
            return Err(WalletError::Superseded);
        }
        let address = outcome?;
        if address.is_empty() {
            return Err(WalletError::InvalidResponse(
                "connect resolved with an empty publicKey".to_string(),
            ));
        }

        log::info!(
            "Wallet connected: {} (isConnected={})",
            shorten_address(&address),
            provider.is_connected()
        );
        self.address.replace(address.clone());
        Ok(address)
    }

    pub async fn disconnect(&self) -> Result<()> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;
        if !self.is_connected() {
            return Err(WalletError::NotConnected);
        }

        provider.disconnect().await?;
        log::info!("Wallet disconnected (isConnected={})", provider.is_connected());
        self.address.borrow_mut().clear();
        Ok(())
    }

    /// Apply an event raised by the extension. Returns whether the address changed.
    ///
    /// Events never open a connection from the disconnected state.
    pub fn handle_event(&self, event: ProviderEvent) -> bool {
        log::debug!("Provider event: {:?}", event);
        if !self.is_connected() {
            return false;
        }

        let mut address = self.address.borrow_mut();
        match event {
            ProviderEvent::Connect(key) | ProviderEvent::AccountChanged(Some(key)) => {
                if key.is_empty() || *address == key {
                    return false;
                }
                *address = key;
            }
            ProviderEvent::Disconnect | ProviderEvent::AccountChanged(None) => address.clear(),
        }
        true
    }

    /// Route provider events into `controller`, calling `on_change` after each
    /// one that changed the address.
    ///
    /// The provider only keeps a weak handle so it never keeps the controller alive.
    pub fn subscribe(controller: &Rc<Self>, on_change: impl Fn(&Self) + 'static) {
        let Some(provider) = controller.provider.as_ref() else {
            return;
        };

        let weak: Weak<Self> = Rc::downgrade(controller);
        provider.subscribe(Rc::new(move |event| {
            if let Some(controller) = weak.upgrade() {
                if controller.handle_event(event) {
                    on_change(&*controller);
                }
            }
        }));
    }
}

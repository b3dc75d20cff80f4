//! Wallet state management
//!
//! The [`ConnectionController`] is the source of truth. This context mirrors its
//! view into signals after every transition so components re-render.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::AppConfig;
use crate::error::{Result, WalletError};
use crate::services::{locate_injected, ConnectionController, PhantomProvider, WalletView};

type Controller = ConnectionController<PhantomProvider>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    pub view: RwSignal<WalletView>,
    /// A connect or disconnect request is waiting on the extension
    pub pending: RwSignal<bool>,
    /// Reason the last request failed, cleared by the next success
    pub notice: RwSignal<Option<String>>,
}

impl WalletContext {
    fn new(controller: Rc<Controller>) -> Self {
        Self {
            view: RwSignal::new(controller.view()),
            controller: StoredValue::new_local(controller),
            pending: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    pub fn connect(&self) {
        let ctx = *self;
        let controller = self.controller.get_value();
        self.pending.set(true);

        leptos::task::spawn_local(async move {
            let outcome = controller.connect().await.map(|_| ());
            ctx.settle(&controller, "connect", outcome);
        });
    }

    pub fn disconnect(&self) {
        let ctx = *self;
        let controller = self.controller.get_value();
        self.pending.set(true);

        leptos::task::spawn_local(async move {
            let outcome = controller.disconnect().await;
            ctx.settle(&controller, "disconnect", outcome);
        });
    }

    /// Popup-free reconnect at startup. Holds `pending` while in flight; a miss
    /// is expected and only logged at debug.
    fn reconnect_trusted(&self) {
        let ctx = *self;
        let controller = self.controller.get_value();
        self.pending.set(true);

        leptos::task::spawn_local(async move {
            let outcome = controller.reconnect_trusted().await.map(|_| ());
            ctx.pending.set(false);
            ctx.view.set(controller.view());
            match outcome {
                Ok(()) => ctx.notice.set(None),
                Err(e) => log::debug!("Trusted reconnect skipped: {}", e),
            }
        });
    }

    fn settle(&self, controller: &Controller, operation: &str, outcome: Result<()>) {
        self.pending.set(false);
        self.view.set(controller.view());
        match outcome {
            Ok(()) => self.notice.set(None),
            Err(WalletError::Superseded) => log::debug!("Wallet {} superseded", operation),
            Err(e) => {
                log::warn!("Wallet {} failed: {}", operation, e);
                self.notice.set(Some(e.to_string()));
            }
        }
    }
}

/// Locate the provider once and publish the wallet context.
pub fn provide_wallet_context(config: &AppConfig) -> WalletContext {
    let provider = locate_injected(&config.provider_key);
    match &provider {
        Some(_) => log::info!("Phantom provider found at window.{}", config.provider_key),
        None => log::info!("No Phantom provider at window.{}", config.provider_key),
    }

    let controller = Rc::new(ConnectionController::new(provider));
    let context = WalletContext::new(controller.clone());

    ConnectionController::subscribe(&controller, move |controller| {
        context.view.set(controller.view());
    });

    if config.eager_connect && controller.has_provider() {
        context.reconnect_trusted();
    }

    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

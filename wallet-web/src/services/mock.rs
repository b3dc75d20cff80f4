//! Scripted [`WalletProvider`] for native tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use shared::dto::wallet::{ConnectOptions, ProviderEvent};
use tokio::sync::oneshot;

use crate::error::{Result, WalletError};
use crate::services::wallet::WalletProvider;

pub(crate) struct MockProvider {
    phantom: bool,
    connected: Cell<bool>,
    connect_results: RefCell<VecDeque<(Option<oneshot::Receiver<()>>, Result<String>)>>,
    disconnect_results: RefCell<VecDeque<Result<()>>>,
    pub connect_calls: RefCell<Vec<ConnectOptions>>,
    pub disconnect_calls: Cell<usize>,
    handler: RefCell<Option<Rc<dyn Fn(ProviderEvent)>>>,
}

impl MockProvider {
    pub fn phantom() -> Self {
        Self::new(true)
    }

    pub fn other_wallet() -> Self {
        Self::new(false)
    }

    fn new(phantom: bool) -> Self {
        Self {
            phantom,
            connected: Cell::new(false),
            connect_results: RefCell::new(VecDeque::new()),
            disconnect_results: RefCell::new(VecDeque::new()),
            connect_calls: RefCell::new(Vec::new()),
            disconnect_calls: Cell::new(0),
            handler: RefCell::new(None),
        }
    }

    pub fn with_connect(self, result: Result<String>) -> Self {
        self.connect_results.borrow_mut().push_back((None, result));
        self
    }

    /// Queue a connect result that is only delivered once `gate` fires.
    pub fn with_gated_connect(self, result: Result<String>, gate: oneshot::Receiver<()>) -> Self {
        self.connect_results.borrow_mut().push_back((Some(gate), result));
        self
    }

    pub fn with_disconnect(self, result: Result<()>) -> Self {
        self.disconnect_results.borrow_mut().push_back(result);
        self
    }

    /// Fire an event as the extension would.
    pub fn emit(&self, event: ProviderEvent) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            handler(event);
        }
    }
}

pub(crate) fn rejected() -> WalletError {
    WalletError::Rejected {
        code: 4001,
        message: "User rejected the request.".to_string(),
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    fn is_connected(&self) -> bool {
        self.connected.get()
    }

    async fn connect(&self, options: ConnectOptions) -> Result<String> {
        self.connect_calls.borrow_mut().push(options);
        let next = self.connect_results.borrow_mut().pop_front();
        let (gate, result) = next.unwrap_or_else(|| (None, Err(rejected())));
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if result.is_ok() {
            self.connected.set(true);
        }
        result
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnect_calls.set(self.disconnect_calls.get() + 1);
        let result = self
            .disconnect_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()));
        if result.is_ok() {
            self.connected.set(false);
        }
        result
    }

    fn subscribe(&self, handler: Rc<dyn Fn(ProviderEvent)>) {
        self.handler.replace(Some(handler));
    }
}

use std::sync::Arc;

use tokio::sync::watch;

/// A single component state slot.
///
/// Values are replaced wholesale; readers get a cheap shared snapshot and
/// subscribers are woken on every replacement, which is the re-render signal.
#[derive(Debug)]
pub struct State<T: ?Sized> {
    tx: watch::Sender<Arc<T>>,
}

impl<T: ?Sized> State<T> {
    pub fn new(initial: Arc<T>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> Arc<T> {
        self.tx.borrow().clone()
    }

    pub fn set(&self, value: Arc<T>) {
        self.tx.send_replace(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<T>> {
        self.tx.subscribe()
    }
}

//! # Observable State Cell
//!
//! This module defines the publication mechanism for the data layer: a
//! single observable value with last-value-wins replay.
//!
//! # Why `watch`?
//! The contract is that a newly attached observer immediately sees the most
//! recent value and can then await transitions. That is exactly what a tokio
//! `watch` channel provides, so [`StateCell`] is a thin owner around its
//! sender half. Intermediate values may coalesce for a slow observer; only
//! the latest value is guaranteed, which is the intended semantics for UI
//! state.

use tokio::sync::watch;

/// An observable value. The owner mutates through [`StateCell::set`] and
/// [`StateCell::update`]; observers subscribe with [`StateCell::subscribe`]
/// and read or await the latest value.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publishes a new value, replacing the previous one.
    pub fn set(&self, value: T) {
        let _ = self.tx.send_replace(value);
    }

    /// Mutates the current value in place and publishes the result. The
    /// closure runs under the cell's internal lock, so a read-modify-write
    /// is atomic with respect to other writers.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        self.tx.send_modify(mutate);
    }

    /// Attaches an observer. The receiver's current value is the latest
    /// published one (last-value replay), and `changed()` resolves on every
    /// subsequent publication.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> StateCell<T> {
    /// Snapshot of the latest published value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn late_subscribers_see_the_latest_value() {
        let cell = StateCell::new(0u32);
        cell.set(1);
        cell.set(2);

        let observer = cell.subscribe();
        assert_eq!(*observer.borrow(), 2);
    }

    #[tokio::test]
    async fn observers_are_woken_on_publication() {
        let cell = StateCell::new("idle");
        let mut observer = cell.subscribe();

        cell.set("loading");
        observer.changed().await.expect("sender still alive");
        assert_eq!(*observer.borrow(), "loading");
    }

    #[tokio::test]
    async fn update_mutates_in_place() {
        let cell = StateCell::new(vec![1, 2]);
        cell.update(|items| items.push(3));
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn set_works_with_no_observers_attached() {
        let cell = StateCell::new(0u32);
        // The initial receiver is dropped inside new(); publishing must
        // still succeed so state can be built up before anyone subscribes.
        cell.set(7);
        assert_eq!(cell.get(), 7);
    }
}

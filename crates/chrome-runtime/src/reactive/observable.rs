#![forbid(unsafe_code)]

//! Shared observable values with change notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    next_sub_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// A shared, version-tracked value with subscriber callbacks.
///
/// Clones share the same underlying value: setting through any clone
/// notifies subscribers registered through any other. Single-threaded by
/// construction (`Rc`/`RefCell`).
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_sub_id: 1,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Version counter; bumps once per value-changing `set`.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Set the value. Equal values are a no-op: no version bump, no
    /// notifications.
    pub fn set(&self, value: T) {
        let callbacks: Vec<Callback<T>>;
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            callbacks = inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect();
        }
        // Borrow released before callbacks run, so a callback may freely
        // read, subscribe, or drop subscriptions.
        let value = self.inner.borrow().value.clone();
        for cb in callbacks {
            cb(&value);
        }
    }

    /// Register a change callback. The callback fires after every
    /// value-changing `set` until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_sub_id;
        inner.next_sub_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        Subscription {
            unsubscribe: Box::new(SubscriptionHandle {
                inner: Rc::downgrade(&self.inner),
                id,
            }),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

trait Unsubscribe {
    fn unsubscribe(&self);
}

struct SubscriptionHandle<T> {
    inner: Weak<RefCell<Inner<T>>>,
    id: u64,
}

impl<T> Unsubscribe for SubscriptionHandle<T> {
    fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade()
            && let Ok(mut inner) = inner.try_borrow_mut()
        {
            inner.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// RAII guard for an [`Observable`] subscription.
///
/// Dropping the guard removes the callback; the observable outliving the
/// guard (or vice versa) is fine in both directions.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Box<dyn Unsubscribe>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}

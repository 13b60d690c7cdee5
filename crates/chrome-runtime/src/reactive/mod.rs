#![forbid(unsafe_code)]

//! Change-tracking primitives for the chrome layer.
//!
//! - [`Observable`]: a shared, version-tracked value with subscriber
//!   callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`BindingScope`]: collects subscriptions for a logical owner so
//!   teardown releases every callback at once.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version
//!    bump, no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.

pub mod observable;
pub mod scope;

pub use observable::{Observable, Subscription};
pub use scope::BindingScope;

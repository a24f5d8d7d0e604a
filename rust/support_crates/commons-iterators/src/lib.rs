//! Fallible iterator adapters with removal support.
//!
//! - [`LazyLoadingIterator`] pulls elements page by page from a
//!   [`LazyLoadingProvider`] and can delete the last returned element through
//!   an optional callback.
//! - [`CompositeIterator`] pairs a key sequence with looked-up values, skipping
//!   keys that do not resolve.
//!
//! Both expose explicit `has_next`/`next_item`/`remove` operations returning
//! [`commons_core::Result`] and also implement [`Iterator`] over
//! `Result<Item>`. Errors raised by the injected callbacks are passed through
//! unchanged.

pub mod composite;
pub mod lazy_loading;

pub use composite::CompositeIterator;
pub use lazy_loading::{
    DEFAULT_PAGE_SIZE, FnProvider, LazyLoadingIterator, LazyLoadingOptions, LazyLoadingProvider,
};

//! Application shell state for the Remarket front-end.
//!
//! Explicit context objects instead of ambient singletons: the host creates
//! a [`Session`], a [`NotificationCenter`], a [`ThemeManager`], and a
//! [`CartState`], and threads them through its UI. Time-dependent behavior
//! (notification expiry) takes the caller's clock as an argument, so every
//! state transition here is deterministic.
//!
//! The product detail page is modeled as a pure reducer in
//! [`product_page`]: data loads and user actions are events, and
//! [`product_page::reduce`] folds them into the next page state.

pub mod cart_state;
pub mod error;
pub mod notify;
pub mod product_page;
pub mod session;
pub mod theme;

pub use cart_state::CartState;
pub use error::AppError;
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use product_page::{reduce, PageEvent, ProductPage};
pub use session::{CurrentUser, Role, Session};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeManager};

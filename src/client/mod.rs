//! # Inventory Client
//!
//! Client side of the item API: an HTTP wrapper, the create/edit form, card
//! rendering, and [`Dashboard`], the local cache that is reloaded from the
//! server after every mutation.
//!
//! There are no optimistic updates. What the dashboard shows is always the
//! last successful read from the server.

mod api;
mod dashboard;
mod errors;
mod form;
mod notify;
mod render;

pub use api::ApiClient;
pub use dashboard::{filter_items, Dashboard};
pub use errors::{ClientError, ClientResult, FormError};
pub use form::ItemForm;
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier, Toast, ToastKind};
pub use render::{format_price, render_item, render_items};

/// Server the CLI talks to when none is given
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

//! External collaborators: the quote page and the desktop notifier

pub mod notifier;
pub mod quote_page;

pub use notifier::{build_notifier, CommandNotifier, LogNotifier, Notifier};
pub use quote_page::{PageSource, QuotePageClient, RetryPolicy};

//! Weekly connpass event digest posted to Slack.
//!
//! A single run walks this pipeline and exits:
//!
//! ```text
//! NotifyWindow::current()
//!        │
//!        ▼
//! aggregate()  ──  EventSource::fetch() per (series, year-month) pair,
//!        │         window-filtered and merged per series
//!        ▼
//! slack::format()  ──  one Block Kit payload per series
//!        │
//!        ▼
//! Dispatcher::send_all()  ──  sequential webhook POSTs
//! ```
//!
//! There is no cross-run state: no persistence of previously sent events,
//! no retries, no pagination. Failures propagate to the scheduler that
//! triggered the run.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod connpass;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod filter;
pub mod slack;
pub mod source;
pub mod window;

// Re-export main types at crate root
pub use aggregate::aggregate;
pub use config::Config;
pub use connpass::ConnpassClient;
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use event::{Event, RawEvent, SeriesEvents};
pub use source::{BoxFuture, EventSource};
pub use window::{NotifyWindow, YearMonth};

//! Presentation helpers layered on top of engine output: display
//! formatting, export records, and chat share summaries.

pub mod display;
pub mod export;
pub mod format;
pub mod share;

pub use display::DisplaySummary;
pub use export::{ExportError, ExportFormat, ExportRecord};
pub use format::{NumberFormat, NumberLocale};
pub use share::{share_message, SharePayload, SHARE_PAYLOAD_TYPE};

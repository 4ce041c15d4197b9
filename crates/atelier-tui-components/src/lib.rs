//! Shared TUI components for the Atelier dashboard.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `widgets` - Reusable ratatui widgets (header, footer, dialogs, select, spinner)
//! - `theme` - Colors, styles, and visual constants
//! - `utils` - Truncation and tag layout utilities
//!
//! # Usage
//!
//! Components are data-agnostic. Pass plain strings and flags rather than
//! depending on domain types.

pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;
pub use utils::{layout_tags, truncate};
pub use widgets::dialogs::{centered_rect, AlertDialog};
pub use widgets::footer::Footer;
pub use widgets::header::{Header, HeaderStat};
pub use widgets::select::{Select, SelectOption};
pub use widgets::spinner::Spinner;

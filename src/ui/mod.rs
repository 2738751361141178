//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No network I/O happens here.

pub mod clause_demo;
pub mod cursor;
pub mod demo;
pub mod header;
pub mod layout;
pub mod page;
pub mod particles;
pub mod progress;
pub mod sections;
pub mod smooth_scroll;
pub mod theme;

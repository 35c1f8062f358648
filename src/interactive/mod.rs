//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Notice, NoticeStyle, Statistics, run_tui};

//! # CLI Module
//!
//! Terminal subcommands of shelfscout.
//!
//! - [`search`] - runs one search and prints the listings as a table
//! - [`serve`] - starts the web front end
//! - [`info`] - shows the cached token and bestseller records
//!
//! Fatal problems (missing configuration, failed searches) end the process
//! through the `error!` macro.

mod info;
mod search;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use info::info;
pub use search::search;
pub use serve::serve;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

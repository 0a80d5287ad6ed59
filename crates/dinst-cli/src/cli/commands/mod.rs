//! CLI command handlers, one file per command.

mod completions;
mod local;
mod main_page;
mod show;

pub use completions::run_completions;
pub use local::run_local;
pub use main_page::{run_main_page, run_main_page_url};
pub use show::run_show;

//! `dinst main-page` and `dinst main-page-url`.

use anyhow::Result;
use dinst_core::{route, EnvConfig};

/// Print the path of the installer's entry page.
pub fn run_main_page(env: &EnvConfig) -> Result<()> {
    let page = route::resolve_main_page_path(env)?;
    println!("{page}");
    Ok(())
}

/// Print the absolute URL of the installer's entry page.
pub fn run_main_page_url(env: &EnvConfig) -> Result<()> {
    let url = route::main_page_url(env)?;
    println!("{url}");
    Ok(())
}

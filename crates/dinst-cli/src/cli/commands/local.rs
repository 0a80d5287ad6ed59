//! `dinst local` – is the installer reached over a local connection?

use anyhow::{Context, Result};
use dinst_core::{connection, EnvConfig};
use url::Url;

pub fn run_local(env: &EnvConfig, location: Option<&str>) -> Result<()> {
    let local = match location {
        Some(raw) => {
            let url = Url::parse(raw).with_context(|| format!("invalid URL: {raw}"))?;
            connection::local_connection(env, &url)
        }
        None => connection::local_connection_for_base_url(env)?,
    };
    println!("{}", if local { "local" } else { "remote" });
    Ok(())
}

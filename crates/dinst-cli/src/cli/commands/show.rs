//! `dinst show` – everything the resolver knows about the current configuration.

use anyhow::Result;
use dinst_core::{connection, route, EnvConfig, MainPage};
use serde::Serialize;

/// Summary of the resolved route for the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub base_url: String,
    pub main_page: MainPage,
    pub path: &'static str,
    pub url: String,
    pub local: bool,
}

impl RouteReport {
    pub fn from_env(env: &EnvConfig) -> Result<Self> {
        let base = route::base_url(env)?;
        let main_page = route::main_page_for(&base);
        Ok(Self {
            base_url: base.to_string(),
            main_page,
            path: main_page.as_str(),
            url: route::main_page_url_for(&base).to_string(),
            local: connection::local_connection(env, &base),
        })
    }

    fn to_text(&self) -> String {
        format!(
            "{:<10} {}\n{:<10} {}\n{:<10} {}\n{:<10} {}",
            "BASE_URL",
            self.base_url,
            "PATH",
            self.path,
            "URL",
            self.url,
            "LOCAL",
            self.local
        )
    }
}

pub fn run_show(env: &EnvConfig, json: bool) -> Result<()> {
    let report = RouteReport::from_env(env)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

//! Tests for each subcommand.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;
use clap::Parser;

#[test]
fn cli_parse_main_page() {
    match parse(&["dinst", "main-page"]) {
        CliCommand::MainPage => {}
        _ => panic!("expected MainPage"),
    }
}

#[test]
fn cli_parse_main_page_url() {
    match parse(&["dinst", "main-page-url"]) {
        CliCommand::MainPageUrl => {}
        _ => panic!("expected MainPageUrl"),
    }
}

#[test]
fn cli_parse_local_default() {
    match parse(&["dinst", "local"]) {
        CliCommand::Local { url } => assert!(url.is_none()),
        _ => panic!("expected Local"),
    }
}

#[test]
fn cli_parse_local_with_url() {
    match parse(&["dinst", "local", "http://127.0.0.1:3000"]) {
        CliCommand::Local { url } => assert_eq!(url.as_deref(), Some("http://127.0.0.1:3000")),
        _ => panic!("expected Local with url"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["dinst", "show"]) {
        CliCommand::Show { json } => assert!(!json),
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_json() {
    match parse(&["dinst", "show", "--json"]) {
        CliCommand::Show { json } => assert!(json),
        _ => panic!("expected Show with --json"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["dinst", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(crate::cli::Cli::try_parse_from(["dinst", "bogus"]).is_err());
}

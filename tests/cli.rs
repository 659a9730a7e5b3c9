// tests/cli.rs
#![cfg(feature = "cli")]

use clap::Parser;

use cftv_dash::cli::{apply_args, Args};
use cftv_dash::config::options::{AppOptions, ExportFormat};

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn headers_flag_forms() {
    assert_eq!(parse(&[]).headers, None);
    assert_eq!(parse(&["--headers"]).headers, Some(true));
    assert_eq!(parse(&["--headers", "false"]).headers, Some(false));
    assert_eq!(parse(&["--headers=false"]).headers, Some(false));
}

#[test]
fn bare_headers_flag_before_other_args() {
    let args = parse(&["--headers", "--tab", "alarms", "-o", "out/a.tsv"]);
    assert_eq!(args.headers, Some(true));

    let mut opts = AppOptions::default();
    opts.export.include_headers = false;
    apply_args(&mut opts, &args);
    assert!(opts.export.include_headers);
    assert_eq!(opts.export.format, ExportFormat::Tsv);
}

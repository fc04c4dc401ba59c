// tests/cli_args.rs
//
// CLI argument parsing.
//
use std::path::PathBuf;

use tpg_scrape::cli::parse_args;
use tpg_scrape::params::Params;

fn parse(args: &[&str]) -> Result<Params, String> {
    let mut params = Params::new();
    parse_args(&mut params, args.iter().map(|s| s.to_string())).map_err(|e| e.to_string())?;
    Ok(params)
}

#[test]
fn channel_is_required() {
    assert!(parse(&[]).is_err());
    assert!(parse(&["--watch"]).is_err());
}

#[test]
fn full_invocation() {
    let p = parse(&["-c", "somestreamer", "-i", "60", "-o", "out", "--no-percent", "--watch"])
        .unwrap();
    assert_eq!(p.channel, "somestreamer");
    assert_eq!(p.interval, 60);
    assert_eq!(p.out_dir, Some(PathBuf::from("out")));
    assert!(!p.show_percentage);
    assert!(p.watch);
}

#[test]
fn defaults_when_only_channel_given() {
    let p = parse(&["--channel", "abc"]).unwrap();
    assert_eq!(p.interval, 30);
    assert_eq!(p.out_dir, None);
    assert!(p.show_percentage);
    assert!(!p.watch);
    assert_eq!(p.out_dir(), PathBuf::from("."));
}

#[test]
fn interval_bounds_are_enforced() {
    assert!(parse(&["-c", "a", "-i", "4"]).is_err());
    assert!(parse(&["-c", "a", "-i", "121"]).is_err());
    assert!(parse(&["-c", "a", "-i", "5"]).is_ok());
    assert!(parse(&["-c", "a", "-i", "120"]).is_ok());
}

#[test]
fn missing_values_and_unknown_args_are_rejected() {
    assert!(parse(&["--channel"]).is_err());
    assert!(parse(&["-c", "a", "--interval"]).is_err());
    assert!(parse(&["-c", "a", "--frobnicate"]).is_err());
}

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use templatizer::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("templatizer")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.targets.is_empty());
    assert!(parsed.config.is_none());
    assert_eq!(parsed.directory, PathBuf::from("."));
    assert!(!parsed.verbose);
}

#[test]
fn test_target_selection() {
    let parsed = Args::try_parse_from(make_args(&["dist", "site"])).unwrap();

    assert_eq!(parsed.targets, vec!["dist".to_string(), "site".to_string()]);
}

#[test]
fn test_config_flag() {
    let parsed =
        Args::try_parse_from(make_args(&["--config", "build/templatizer.yml"])).unwrap();

    assert_eq!(parsed.config, Some(PathBuf::from("build/templatizer.yml")));
}

#[test]
fn test_directory_flag() {
    let parsed = Args::try_parse_from(make_args(&["-C", "web", "dist"])).unwrap();

    assert_eq!(parsed.directory, PathBuf::from("web"));
    assert_eq!(parsed.targets, vec!["dist".to_string()]);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v", "-c", "t.json"])).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.config, Some(PathBuf::from("t.json")));
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--unknown"])).is_err());
}

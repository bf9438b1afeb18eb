use clap::{CommandFactory, FromArgMatches, Parser};
use seqforge::config::{Config, SearchParams};
use seqforge::error::SeqForgeError;
use std::fs;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .expect("args should parse");
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_cli_defaults() {
    let (config, _) = parse(&[]);
    assert_eq!(config.search.universe_size, 100);
    assert_eq!(config.search.window, 3);
    assert!(config.search.parallel);
    assert_eq!(config.search.max_sweeps, None);
}

#[test]
fn test_sequential_flag_disables_parallel() {
    let (config, _) = parse(&["--sequential", "--max-sweeps", "4"]);
    assert!(!config.search.parallel);
    assert_eq!(config.search.max_sweeps, Some(4));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{ "universe_size": 40, "window": 2, "parallel": false }"#).unwrap();

    let params = SearchParams::load_from_file(&path).unwrap();
    assert_eq!(params.universe_size, 40);
    assert_eq!(params.window, 2);
    assert!(!params.parallel);
    assert_eq!(params.min_improvement, 1e-9);
}

#[test]
fn test_load_rejects_bad_files() {
    let dir = tempfile::tempdir().unwrap();

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        SearchParams::load_from_file(&broken),
        Err(SeqForgeError::Json(_))
    ));

    let zero = dir.path().join("zero.json");
    fs::write(&zero, r#"{ "window": 0 }"#).unwrap();
    assert!(matches!(
        SearchParams::load_from_file(&zero),
        Err(SeqForgeError::Config(_))
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        SearchParams::load_from_file(&missing),
        Err(SeqForgeError::Io(_))
    ));
}

#[test]
fn test_merge_keeps_file_values_unless_flag_given() {
    let mut from_file = SearchParams {
        universe_size: 40,
        window: 2,
        ..Default::default()
    };

    let (cli, matches) = parse(&["--window", "5"]);
    from_file.merge_from_cli(&cli.search, &matches);

    assert_eq!(from_file.universe_size, 40);
    assert_eq!(from_file.window, 5);
    assert!(from_file.parallel);
}

use super::*;
use clap::error::ErrorKind;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn cli_parse_no_args() {
    assert!(parse(&["draft-url"]).is_ok());
}

#[test]
fn cli_rejects_positional_argument() {
    let err = parse(&["draft-url", "deploy.log"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn cli_rejects_unknown_flag() {
    let err = parse(&["draft-url", "--name", "x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn cli_help_flag() {
    let err = parse(&["draft-url", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn cli_version_flag() {
    let err = parse(&["draft-url", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

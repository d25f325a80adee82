//! Library integration tests.

use stationup::StationupError;

#[test]
fn error_types_are_public() {
    let err = StationupError::ConfigValidationError {
        message: "no dependencies".into(),
    };
    assert!(err.to_string().contains("no dependencies"));
    assert!(err.is_config_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> stationup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use stationup::cli::{Cli, Commands};

    let cli = Cli::parse_from(["stationup", "config", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Config(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn ui_types_are_public() {
    use stationup::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::with_mode(OutputMode::Quiet);
    ui.success("done");
    assert_eq!(ui.output_mode(), OutputMode::Quiet);
    assert!(ui.has_success("done"));
}

use std::io::Write;

use clap::Parser;
use tempfile::{tempdir, NamedTempFile};

use tui_chess::cli::Cli;
use tui_chess::config::Config;
use tui_chess::types::{CaptureSimulation, MateScan};

#[test]
fn empty_json_gives_defaults() {
    let cfg = Config::from_json("{}").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.rules.capture_simulation, CaptureSimulation::RemoveCaptured);
    assert_eq!(cfg.rules.mate_scan, MateScan::AllPieces);
    assert_eq!((cfg.cell_width, cfg.cell_height), (4, 2));
    assert!(cfg.log_file.is_none());
}

#[test]
fn json_overrides_fields() {
    let cfg = Config::from_json(
        r#"{
            "rules": { "capture_simulation": "keep_captured" },
            "cell_width": 6,
            "log_level": "debug"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.rules.capture_simulation, CaptureSimulation::KeepCaptured);
    assert_eq!(cfg.rules.mate_scan, MateScan::AllPieces);
    assert_eq!(cfg.cell_width, 6);
    assert_eq!(cfg.cell_height, 2);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn invalid_json_is_an_error() {
    assert!(Config::from_json("{ not json").is_err());
    assert!(Config::from_json(r#"{ "rules": { "mate_scan": "sometimes" } }"#).is_err());
}

#[test]
fn cli_flags_win_over_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "rules": {{ "mate_scan": "selected_piece" }}, "cell_height": 3 }}"#).unwrap();

    let path = file.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["tui-chess", "--config", &path, "--mate-scan", "all"]).unwrap();
    let cfg = Config::resolve(&cli, None).unwrap();

    assert_eq!(cfg.rules.mate_scan, MateScan::AllPieces);
    assert_eq!(cfg.cell_height, 3);
}

#[test]
fn env_config_is_used_when_present() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chess.json");
    std::fs::write(&path, r#"{ "rules": { "capture_simulation": "keep_captured" } }"#).unwrap();

    let cli = Cli::try_parse_from(["tui-chess"]).unwrap();
    let cfg = Config::resolve(&cli, Some(path)).unwrap();
    assert_eq!(cfg.rules.capture_simulation, CaptureSimulation::KeepCaptured);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let cli = Cli::try_parse_from(["tui-chess", "--config", "/definitely/not/here.json"]).unwrap();
    assert!(Config::resolve(&cli, None).is_err());
}

#[test]
fn missing_env_config_falls_back_to_defaults() {
    let cli = Cli::try_parse_from(["tui-chess", "--cell-width", "2"]).unwrap();
    let cfg = Config::resolve(&cli, Some("/definitely/not/here.json".into())).unwrap();
    assert_eq!(cfg.cell_width, 2);
    assert_eq!(cfg.rules, Default::default());
}

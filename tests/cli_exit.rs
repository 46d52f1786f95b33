// tests/cli_exit.rs - Exit code tests
use std::fs;
use std::path::{Path, PathBuf};

use pedigree_core::cli::dispatch::execute;
use pedigree_core::cli::handlers::{handle_show, ShowArgs};
use pedigree_core::cli::{Commands, EraArgs, GlobalArgs};
use pedigree_core::exit::PedigreeExit;
use tempfile::TempDir;

const REGISTRY: &str = "\
Taxon,DLC_ID,Name,Sex,Sire_ID,Dam_ID,DOB
LCAT,A,Alpha,M,,,01Jan1980
LCAT,B,Beta,F,A,,01Jan1985
";

fn temp() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("registry.csv"), REGISTRY).unwrap();
    fs::write(d.path().join("pedigree.toml"), "").unwrap();
    d
}

fn globals(dir: &Path, source: &str) -> GlobalArgs {
    GlobalArgs {
        source: Some(dir.join(source)),
        taxon: None,
        config: Some(dir.join("pedigree.toml")),
    }
}

fn show(radius: Option<u32>, output: PathBuf) -> Commands {
    Commands::Show {
        era: EraArgs::default(),
        focus: Some("B".to_string()),
        radius,
        json: true,
        output: Some(output),
    }
}

fn exit_of(result: anyhow::Result<PedigreeExit>) -> PedigreeExit {
    result.unwrap_or_else(|e| PedigreeExit::from_error(&e))
}

#[test]
fn test_exit_0_show_writes_json() {
    let d = temp();
    let out = d.path().join("view.json");
    let code = exit_of(execute(&globals(d.path(), "registry.csv"), show(Some(1), out.clone())));
    assert_eq!(code, PedigreeExit::Success);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(json["title"], "Family Focus: B (Radius: 1)");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_exit_2_invalid_radius() {
    let d = temp();
    let out = d.path().join("view.json");
    let code = exit_of(execute(&globals(d.path(), "registry.csv"), show(Some(11), out.clone())));
    assert_eq!(code, PedigreeExit::InvalidInput);
    assert!(!out.exists());
}

#[test]
fn test_exit_2_invalid_era() {
    let d = temp();
    let cmd = Commands::Summary {
        era: EraArgs {
            from: Some(2000),
            to: Some(1990),
        },
    };
    assert_eq!(exit_of(execute(&globals(d.path(), "registry.csv"), cmd)), PedigreeExit::InvalidInput);
}

#[test]
fn test_exit_3_missing_source() {
    let d = temp();
    let cmd = Commands::Leaderboard {
        era: EraArgs::default(),
        top: Some(5),
    };
    assert_eq!(
        exit_of(execute(&globals(d.path(), "missing.csv"), cmd)),
        PedigreeExit::SourceUnavailable
    );
}

#[test]
fn test_exit_1_wrong_taxon() {
    let d = temp();
    let mut g = globals(d.path(), "registry.csv");
    g.taxon = Some("PCOQ".to_string());
    let cmd = Commands::Summary {
        era: EraArgs::default(),
    };
    assert_eq!(exit_of(execute(&g, cmd)), PedigreeExit::Error);
}

#[test]
fn test_exit_codes_distinct() {
    let codes = [
        PedigreeExit::Success,
        PedigreeExit::Error,
        PedigreeExit::InvalidInput,
        PedigreeExit::SourceUnavailable,
    ]
    .map(PedigreeExit::code);
    assert_eq!(codes, [0, 1, 2, 3]);
}

#[test]
fn test_exit_1_radius_without_focus() {
    let d = temp();
    let out = d.path().join("view.json");
    let args = ShowArgs {
        radius: Some(2),
        json: true,
        output: Some(out.clone()),
        ..ShowArgs::default()
    };
    let err = handle_show(&globals(d.path(), "registry.csv"), &args).unwrap_err();
    assert!(err.to_string().contains("--focus"));
    assert_eq!(PedigreeExit::from_error(&err), PedigreeExit::Error);
    assert!(!out.exists());
}

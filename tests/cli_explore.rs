// tests/cli_explore.rs - Interactive session tests
use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use pedigree_core::cli::explore::Session;
use pedigree_core::cli::handlers::{open_session, setup};
use pedigree_core::cli::{EraArgs, GlobalArgs};
use pedigree_core::registry::DatasetCache;
use pedigree_core::session::Selection;

const REGISTRY: &str = "\
Taxon,DLC_ID,Name,Sex,Sire_ID,Dam_ID,DOB
LCAT,A,Alpha,M,,,01Jan1980
LCAT,B,Beta,F,A,,01Jan1985
LCAT,C,Gamma,F,A,B,01Jan1990
";

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for d in chars.by_ref() {
                if d == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn globals(source: &Path) -> GlobalArgs {
    GlobalArgs {
        source: Some(source.to_path_buf()),
        taxon: None,
        config: Some(source.with_file_name("absent.toml")),
    }
}

fn start(source: &Path) -> Result<Session> {
    fs::write(source.with_file_name("absent.toml"), "")?;
    let setup = setup(&globals(source))?;
    let mut cache = DatasetCache::new();
    let explorer = open_session(&setup, &mut cache, EraArgs::default())?;
    Ok(Session::new(explorer, setup, cache))
}

fn run(session: &mut Session, script: &str) -> Result<String> {
    let mut out = Vec::new();
    session.run(Cursor::new(script.to_string()), &mut out)?;
    Ok(strip_ansi(&String::from_utf8(out)?))
}

#[test]
fn test_select_radius_reset() -> Result<()> {
    let d = tempfile::tempdir()?;
    let source = d.path().join("registry.csv");
    fs::write(&source, REGISTRY)?;
    let mut session = start(&source)?;

    let out = run(&mut session, "select C\nradius 1\nreset\nquit\n")?;
    assert!(out.contains("Family Focus: C (Radius: 3)"));
    assert!(out.contains("Family Focus: C (Radius: 1)"));
    assert!(out.contains("Lineage Network (1980 - 1990)"));
    assert_eq!(session.explorer().selection(), &Selection::Unfocused);
    Ok(())
}

#[test]
fn test_bad_input_does_not_end_session() -> Result<()> {
    let d = tempfile::tempdir()?;
    let source = d.path().join("registry.csv");
    fs::write(&source, REGISTRY)?;
    let mut session = start(&source)?;

    let out = run(&mut session, "radius 40\nera 2000 1990\nwobble\npick 1\n")?;
    assert!(out.contains("Invalid radius 40"));
    assert!(out.contains("Invalid birth era"));
    assert!(out.contains("unrecognized command"));
    assert!(session.explorer().selection().is_focused());
    Ok(())
}

#[test]
fn test_top_lists_leaderboard() -> Result<()> {
    let d = tempfile::tempdir()?;
    let source = d.path().join("registry.csv");
    fs::write(&source, REGISTRY)?;
    let mut session = start(&source)?;

    let out = run(&mut session, "top\n")?;
    for name in ["Alpha", "Beta", "Gamma"] {
        assert!(out.contains(name), "{name} missing from leaderboard");
    }
    Ok(())
}

#[test]
fn test_reload_detects_changes() -> Result<()> {
    let d = tempfile::tempdir()?;
    let source = d.path().join("registry.csv");
    fs::write(&source, REGISTRY)?;
    let mut session = start(&source)?;

    let out = run(&mut session, "reload\n")?;
    assert!(out.contains("Registry unchanged."));

    fs::write(&source, format!("{REGISTRY}LCAT,D,Delta,M,C,,01Jan1989\n"))?;
    let out = run(&mut session, "reload\n")?;
    assert!(out.contains("Registry reloaded."));
    assert_eq!(session.explorer().view().in_era, 4);
    Ok(())
}

#[test]
fn test_missing_source_fails_setup() -> Result<()> {
    let d = tempfile::tempdir()?;
    let source = d.path().join("nothing.csv");
    let err = start(&source).err().expect("missing registry must fail");
    assert!(err.to_string().contains("unavailable"));
    Ok(())
}

#[test]
fn test_reload_keeps_focus() -> Result<()> {
    let d = tempfile::tempdir()?;
    let source = d.path().join("registry.csv");
    fs::write(&source, REGISTRY)?;
    let mut session = start(&source)?;

    run(&mut session, "select C\nradius 1\n")?;
    fs::write(&source, format!("{REGISTRY}LCAT,D,Delta,M,C,,01Jan1989\n"))?;
    let out = run(&mut session, "reload\n")?;
    assert!(out.contains("Registry reloaded."));
    assert!(out.contains("Family Focus: C (Radius: 1)"));

    let focus = session.explorer().selection().focus().map(|(id, r)| (id.to_string(), r.get()));
    assert_eq!(focus, Some(("C".to_string(), 1)));
    let ids: Vec<&str> = session.explorer().view().nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);
    Ok(())
}

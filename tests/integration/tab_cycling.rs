use crate::support::{FakeEditor, Harness, ScriptedUi};
use anyhow::Result;
use scratchpads::{Filetype, TabCoordinator};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn coordinator(editor: &FakeEditor) -> TabCoordinator<'_> {
    TabCoordinator::with_settle(editor, Duration::ZERO)
}

#[test]
fn direct_mode_closes_only_scratch_tabs() -> Result<()> {
    let harness = Harness::new();
    let dir = harness.scratch_dir();
    let scratch_a = dir.join("scratch.py");
    let scratch_b = dir.join("scratch1.rs");
    let other = PathBuf::from("/somewhere/else/main.rs");

    let editor = FakeEditor::direct().with_tabs(vec![
        scratch_a.clone(),
        other.clone(),
        scratch_b.clone(),
    ]);
    coordinator(&editor).close_all_scratch_tabs(&dir)?;

    assert_eq!(editor.tabs(), vec![other]);
    assert!(editor.closed().contains(&scratch_a));
    assert!(editor.closed().contains(&scratch_b));
    Ok(())
}

#[test]
fn close_tabs_for_path_without_open_editor_is_a_noop() -> Result<()> {
    let harness = Harness::new();
    let editor = FakeEditor::direct();
    coordinator(&editor).close_tabs_for_path(&harness.scratch_dir().join("scratch.py"))?;
    assert!(editor.closed().is_empty());

    let cycling = FakeEditor::cycling();
    coordinator(&cycling).close_tabs_for_path(&harness.scratch_dir().join("scratch.py"))?;
    assert!(cycling.closed().is_empty());
    Ok(())
}

#[test]
fn cycle_mode_covers_the_whole_ring_without_closing_the_anchor() -> Result<()> {
    let harness = Harness::new();
    let dir = harness.scratch_dir();
    let s1 = dir.join("scratch.py");
    let s2 = dir.join("scratch1.py");
    let s3 = dir.join("scratch2.py");
    let anchor = PathBuf::from("/project/src/lib.rs");
    let other = PathBuf::from("/project/README.md");

    // Active tab is a scratch document; two more are scattered in the ring.
    let editor = FakeEditor::cycling().with_tabs(vec![
        s1.clone(),
        anchor.clone(),
        s2.clone(),
        s3.clone(),
        other.clone(),
    ]);
    coordinator(&editor).close_all_scratch_tabs(&dir)?;

    let mut closed = editor.closed();
    closed.sort();
    let mut expected = vec![s1, s2, s3];
    expected.sort();
    assert_eq!(closed, expected);
    assert_eq!(editor.tabs(), vec![anchor, other]);
    Ok(())
}

#[test]
fn cycle_mode_with_only_scratch_tabs_empties_the_ring() -> Result<()> {
    let harness = Harness::new();
    let dir = harness.scratch_dir();
    let s1 = dir.join("scratch.py");
    let s2 = dir.join("scratch1.py");

    let editor = FakeEditor::cycling().with_tabs(vec![s1, s2]);
    coordinator(&editor).close_all_scratch_tabs(&dir)?;

    assert!(editor.tabs().is_empty());
    assert_eq!(editor.closed().len(), 2);
    Ok(())
}

#[test]
fn cycle_mode_with_adjacent_scratch_tabs_closes_each_once() -> Result<()> {
    let harness = Harness::new();
    let dir = harness.scratch_dir();
    let anchor = PathBuf::from("/project/notes.txt");
    let s1 = dir.join("scratch.md");
    let s2 = dir.join("scratch1.md");
    let s3 = dir.join("scratch2.md");

    // Anchor is active; all scratch tabs sit consecutively after it.
    let editor = FakeEditor::cycling().with_tabs(vec![
        anchor.clone(),
        s1.clone(),
        s2.clone(),
        s3.clone(),
    ]);
    coordinator(&editor).close_all_scratch_tabs(&dir)?;

    assert_eq!(editor.tabs(), vec![anchor]);
    assert_eq!(editor.closed().len(), 3);
    Ok(())
}

#[test]
fn remove_all_through_the_manager_uses_cycle_mode() -> Result<()> {
    let harness = Harness::new();
    let dir = harness.scratch_dir();
    fs::create_dir_all(&dir)?;

    let mut manager = harness.manager(
        |layer| layer.prompt_for_removal = Some(false),
        ScriptedUi::silent(),
        FakeEditor::cycling().with_tabs(vec![PathBuf::from("/project/src/main.rs")]),
    );
    let created = manager
        .new_scratchpad(Some(Filetype {
            name: "Python".into(),
            ext: ".py".into(),
        }))?
        .unwrap();

    manager.remove_all_scratchpads()?;

    assert!(manager.store().file_names()?.is_empty());
    assert!(manager.editor().closed().contains(&created));
    assert_eq!(
        manager.editor().tabs(),
        vec![PathBuf::from("/project/src/main.rs")]
    );
    Ok(())
}

#[test]
fn find_open_editor_reports_open_documents() -> Result<()> {
    let harness = Harness::new();
    let path = harness.scratch_dir().join("scratch.py");

    let editor = FakeEditor::direct().with_tabs(vec![path.clone()]);
    assert!(coordinator(&editor).find_open_editor(&path).is_some());
    assert!(coordinator(&editor)
        .find_open_editor(&harness.scratch_dir().join("scratch1.py"))
        .is_none());

    // Cycle mode can only probe the active document.
    let cycling = FakeEditor::cycling().with_tabs(vec![path.clone()]);
    assert!(coordinator(&cycling).find_open_editor(&path).is_some());
    Ok(())
}

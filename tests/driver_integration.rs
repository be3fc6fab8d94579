mod common;

use builder_pilot::instruction::parse_steps;
use builder_pilot::{ArtifactStore, PilotError, Result, RunDriver, Step};
use common::{Call, RecordingPage, ScriptedRefiner, timing};
use serde_json::json;
use std::cell::{Cell, RefCell};

fn builder_plan(_command: &str) -> Result<Vec<Step>> {
    parse_steps(json!([
        {"action": "navigate", "details": "https://builder.test"},
        {"action": "type", "details": {"selector": "#prompt", "text": "a pricing page"}},
        {"action": "click", "details": "text=Generate"},
        {"action": "wait", "details": 20000},
        {"action": "extractCode", "details": "#preview"},
        {"action": "refineCode", "details": {"refinement": "make responsive"}},
        {"action": "hover", "details": "#preview"}
    ]))
}

#[test]
fn test_full_run_reports_code_and_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    let refiner = ScriptedRefiner::new().answer("<div class='r'>pricing</div>");
    let driver = RunDriver::new(&builder_plan, &refiner, ArtifactStore::new(tmp.path()), timing());
    let page = RecordingPage::new().with_html("#preview", "<div>pricing</div>");
    let handle = page.clone();

    let report = driver.run("build a pricing page", move || Ok(page)).unwrap();
    let store = driver.artifacts();

    assert_eq!(report.command, "build a pricing page");
    assert_eq!(report.final_code.as_deref(), Some("<div class='r'>pricing</div>"));
    assert_eq!(report.iteration_count, 1);
    assert_eq!(report.steps_total, 7);
    assert_eq!(report.steps_executed, 6);
    assert_eq!(report.steps_skipped, 1);
    assert_eq!(report.artifacts, vec![store.instructions_path(), store.extracted_path(), store.iteration_path(1)]);
    assert_eq!(report.screenshot, store.screenshot_path());
    assert!(report.screenshot.exists());

    assert_eq!(handle.calls().last(), Some(&Call::Screenshot(store.screenshot_path())));

    let plan: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.instructions_path()).unwrap()).unwrap();
    assert_eq!(plan.as_array().unwrap().len(), 7);
    assert_eq!(plan[6]["action"], "hover");
}

#[test]
fn test_planner_receives_the_command() {
    let tmp = tempfile::tempdir().unwrap();
    let seen = RefCell::new(Vec::new());
    let planner = |command: &str| -> Result<Vec<Step>> {
        seen.borrow_mut().push(command.to_string());
        Ok(Vec::new())
    };
    let refiner = ScriptedRefiner::new();
    let driver = RunDriver::new(&planner, &refiner, ArtifactStore::new(tmp.path()), timing());

    let report = driver.run("make me a landing page", || Ok(RecordingPage::new())).unwrap();

    assert_eq!(seen.borrow().as_slice(), ["make me a landing page"]);
    assert_eq!(report.final_code, None);
    assert_eq!(report.steps_total, 0);
    assert!(report.screenshot.exists());
}

#[test]
fn test_bad_plan_never_opens_the_browser() {
    let tmp = tempfile::tempdir().unwrap();
    let planner = |_: &str| -> Result<Vec<Step>> { builder_pilot::instruction::parse_step_list("not json") };
    let refiner = ScriptedRefiner::new();
    let driver = RunDriver::new(&planner, &refiner, ArtifactStore::new(tmp.path()), timing());
    let opened = Cell::new(false);

    let err = driver
        .run("anything", || {
            opened.set(true);
            Ok(RecordingPage::new())
        })
        .unwrap_err();

    assert!(matches!(err, PilotError::InstructionFormat(_)));
    assert!(!opened.get());
    assert!(!driver.artifacts().instructions_path().exists());
}

#[test]
fn test_session_failure_surfaces() {
    let tmp = tempfile::tempdir().unwrap();
    let refiner = ScriptedRefiner::new();
    let driver = RunDriver::new(&builder_plan, &refiner, ArtifactStore::new(tmp.path()), timing());

    let err = driver
        .run("anything", || -> Result<RecordingPage> { Err(PilotError::LaunchFailed("no chrome".to_string())) })
        .unwrap_err();

    assert!(matches!(err, PilotError::LaunchFailed(_)));
}

#[test]
fn test_fatal_step_keeps_earlier_artifacts_and_skips_screenshot() {
    let tmp = tempfile::tempdir().unwrap();
    let planner = |_: &str| -> Result<Vec<Step>> {
        parse_steps(json!([
            {"action": "extractCode", "details": "#preview"},
            {"action": "click", "details": "#regenerate"},
            {"action": "refineCode", "details": "never happens"}
        ]))
    };
    let refiner = ScriptedRefiner::new().answer("<div>v1</div>");
    let driver = RunDriver::new(&planner, &refiner, ArtifactStore::new(tmp.path()), timing());
    let page = RecordingPage::new().with_html("#preview", "<div>v0</div>").with_missing("#regenerate");
    let handle = page.clone();

    let err = driver.run("anything", move || Ok(page)).unwrap_err();
    let store = driver.artifacts();

    assert!(matches!(err, PilotError::ElementNotFound(_)));
    assert_eq!(std::fs::read_to_string(store.extracted_path()).unwrap(), "<div>v0</div>");
    assert!(!store.iteration_path(1).exists());
    assert!(!store.screenshot_path().exists());
    assert!(refiner.requests().is_empty());
    assert!(!handle.calls().iter().any(|call| matches!(call, Call::Screenshot(_))));
}

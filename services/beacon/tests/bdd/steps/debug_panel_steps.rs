//! BDD step definitions for the debug panel feature

use cucumber::{then, when};

use beacon::Command;

use crate::world::BeaconWorld;

async fn run_command(world: &mut BeaconWorld, command: Command) {
    let session = world.session();
    let result = session.handle(command).await.map(|_| ());
    let rendered = session.render();
    world.command_result = Some(result);
    world.rendered = Some(rendered);
}

#[when("the user toggles the debug panel")]
async fn toggle_debug(world: &mut BeaconWorld) {
    run_command(world, Command::ToggleDebug).await;
}

#[when("the user logs debug info")]
async fn log_debug(world: &mut BeaconWorld) {
    run_command(world, Command::LogDebug).await;
}

#[when("the user clears the console")]
async fn clear_console(world: &mut BeaconWorld) {
    run_command(world, Command::ClearConsole).await;
}

#[then("the debug panel is open")]
fn panel_is_open(world: &mut BeaconWorld) {
    assert!(world.session().panel().is_open());
}

#[then("the debug panel is closed")]
fn panel_is_closed(world: &mut BeaconWorld) {
    assert!(!world.session().panel().is_open());
}

#[then(expr = "the snapshot reports {word} as {word}")]
fn snapshot_flag(world: &mut BeaconWorld, flag: String, value: bool) {
    let flags = world.session().snapshot().state;
    let actual = match flag.as_str() {
        "loading" => flags.loading,
        "hasError" => flags.has_error,
        "hasBackendData" => flags.has_backend_data,
        "hasServerStatus" => flags.has_server_status,
        other => panic!("unknown snapshot flag '{}'", other),
    };
    assert_eq!(actual, value, "snapshot flag {}", flag);
}

#[then(expr = "the snapshot backend URL is {string}")]
fn snapshot_backend_url(world: &mut BeaconWorld, url: String) {
    assert_eq!(world.session().snapshot().backend_url, url);
}

#[then(expr = "the snapshot lists environment variable {word} as {string}")]
fn snapshot_env_var(world: &mut BeaconWorld, name: String, value: String) {
    let snapshot = world.session().snapshot();
    assert_eq!(
        snapshot.environment_variables.get(&name),
        Some(&Some(value)),
        "environment variables: {:?}",
        snapshot.environment_variables
    );
}

#[then(expr = "the snapshot lists environment variable {word} as unset")]
fn snapshot_env_var_unset(world: &mut BeaconWorld, name: String) {
    let snapshot = world.session().snapshot();
    assert_eq!(snapshot.environment_variables.get(&name), Some(&None));
}

#[then(expr = "the console shows {int} line(s)")]
fn console_line_count(world: &mut BeaconWorld, count: usize) {
    assert_eq!(
        world.console.transcript().len(),
        count,
        "transcript: {:?}",
        world.console.transcript()
    );
}

#[then(expr = "console line {int} starts with {string}")]
fn console_line_starts_with(world: &mut BeaconWorld, index: usize, prefix: String) {
    let transcript = world.console.transcript();
    let line = transcript
        .get(index - 1)
        .unwrap_or_else(|| panic!("no console line {} in {:?}", index, transcript));
    assert!(
        line.starts_with(&prefix),
        "expected line {} to start with '{}', got '{}'",
        index,
        prefix,
        line
    );
}

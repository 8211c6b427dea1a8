//! BDD step definitions for the fetch lifecycle feature

use cucumber::{given, then, when};
use serde_json::json;

use beacon::Command;

use crate::world::{BeaconWorld, Scripted};

const HELLO: &str = "/api/hello";
const STATUS: &str = "/api/status";

fn endpoint(name: &str) -> &'static str {
    match name {
        "greeting" => HELLO,
        "status" => STATUS,
        other => panic!("unknown endpoint '{}'", other),
    }
}

fn respond(status: u16, body: impl Into<String>) -> Scripted {
    Scripted::Respond {
        status,
        body: body.into(),
    }
}

// --- Given steps ---

#[given(expr = "the greeting endpoint returns user {string} with features {string}")]
fn greeting_returns(world: &mut BeaconWorld, user: String, features: String) {
    let features: Vec<&str> = features.split(',').map(str::trim).collect();
    let body = json!({
        "message": "Hello from the backend!",
        "data": { "user": user, "status": "active", "features": features }
    });
    world.http.set(HELLO, respond(200, body.to_string()));
}

#[given(expr = "the status endpoint reports uptime {int} and version {string}")]
fn status_reports(world: &mut BeaconWorld, uptime: i64, version: String) {
    let body = json!({ "status": "healthy", "uptime": uptime, "version": version });
    world.http.set(STATUS, respond(200, body.to_string()));
}

#[given(expr = "the status endpoint reports heap usage of {int} bytes")]
fn status_reports_heap(world: &mut BeaconWorld, heap_used: i64) {
    let body = json!({
        "status": "healthy",
        "uptime": 5,
        "version": "1.0",
        "memoryUsage": { "heapUsed": heap_used }
    });
    world.http.set(STATUS, respond(200, body.to_string()));
}

#[given("the backend is healthy")]
fn backend_is_healthy(world: &mut BeaconWorld) {
    greeting_returns(world, "Demo User".to_string(), "Rust, Axum".to_string());
    status_reports(world, 42, "1.0".to_string());
}

#[given(expr = "the {word} endpoint answers {int} with body {string}")]
fn endpoint_answers(world: &mut BeaconWorld, name: String, status: u16, body: String) {
    world.http.set(endpoint(&name), respond(status, body));
}

#[given(expr = "the {word} endpoint serves an HTML page")]
fn endpoint_serves_html(world: &mut BeaconWorld, name: String) {
    world.http.set(
        endpoint(&name),
        respond(200, "<!DOCTYPE html><html><body>app</body></html>"),
    );
}

#[given(expr = "the {word} endpoint refuses connections")]
fn endpoint_refuses(world: &mut BeaconWorld, name: String) {
    world.http.set(endpoint(&name), Scripted::Refuse);
}

#[given(expr = "the {word} endpoint is unreachable")]
fn endpoint_unreachable(world: &mut BeaconWorld, name: String) {
    world.http.set(endpoint(&name), Scripted::NetworkDown);
}

#[given("the greeting endpoint omits its data object")]
fn greeting_without_data(world: &mut BeaconWorld) {
    world
        .http
        .set(HELLO, respond(200, r#"{"message":"Hello from the backend!"}"#));
}

// --- When steps ---

#[when("the page loads")]
async fn page_loads(world: &mut BeaconWorld) {
    let mut session = world.build_session();
    session.start().await;
    world.rendered = Some(session.render());
    world.session = Some(session);
}

#[when("the user retries")]
async fn user_retries(world: &mut BeaconWorld) {
    let session = world.session();
    let result = session.handle(Command::Retry).await.map(|_| ());
    let rendered = session.render();
    world.command_result = Some(result);
    world.rendered = Some(rendered);
}

// --- Then steps ---

#[then("the page shows the success view")]
fn shows_success(world: &mut BeaconWorld) {
    let state = world.session().state();
    assert!(state.hello().is_some(), "expected Success, got {:?}", state);
    assert!(state.status().is_some(), "expected Success, got {:?}", state);
}

#[then(expr = "the page shows {string}")]
fn page_shows(world: &mut BeaconWorld, text: String) {
    let rendered = world.rendered.as_deref().unwrap_or_default();
    assert!(
        rendered.contains(&text),
        "expected '{}' in page:\n{}",
        text,
        rendered
    );
}

#[then(expr = "the page does not show {string}")]
fn page_does_not_show(world: &mut BeaconWorld, text: String) {
    let rendered = world.rendered.as_deref().unwrap_or_default();
    assert!(
        !rendered.contains(&text),
        "did not expect '{}' in page:\n{}",
        text,
        rendered
    );
}

#[then(expr = "the error message is {string}")]
fn error_message_is(world: &mut BeaconWorld, message: String) {
    assert_eq!(world.session().state().error(), Some(message.as_str()));
}

#[then("no payload is shown")]
fn no_payload(world: &mut BeaconWorld) {
    let state = world.session().state();
    assert!(state.hello().is_none());
    assert!(state.status().is_none());
}

#[then(expr = "{int} requests were sent")]
fn requests_sent(world: &mut BeaconWorld, count: usize) {
    assert_eq!(world.http.requested().len(), count);
}

#[then(expr = "the fetch cycle is {int}")]
fn fetch_cycle_is(world: &mut BeaconWorld, cycle: u64) {
    assert_eq!(world.session().orchestrator().cycle().get(), cycle);
}

#[then("the command succeeds")]
fn command_succeeds(world: &mut BeaconWorld) {
    match world.command_result.take() {
        Some(Ok(())) => {}
        other => panic!("expected the command to succeed, got {:?}", other),
    }
}

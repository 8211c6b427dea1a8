//! BDD step definitions for the configuration feature

use cucumber::{given, then, when};

use crate::world::BeaconWorld;

#[given(expr = "the backend base URL is {string}")]
fn backend_url_env(world: &mut BeaconWorld, url: String) {
    world.env.backend_url = Some(url);
}

#[given("no backend base URL is set")]
fn no_backend_url(world: &mut BeaconWorld) {
    world.env.backend_url = None;
}

#[given(expr = "the config file sets the backend URL to {string}")]
fn config_file_url(world: &mut BeaconWorld, url: String) {
    world.config_file.backend_url = Some(url);
}

#[given(expr = "the environment tag is {string}")]
fn environment_tag(world: &mut BeaconWorld, tag: String) {
    world.env.environment = Some(tag);
}

#[when("the configuration is resolved")]
fn configuration_resolved(world: &mut BeaconWorld) {
    world.resolve();
}

#[then(expr = "the base URL is {string}")]
fn base_url_is(world: &mut BeaconWorld, url: String) {
    let resolved = world.resolved.as_ref().expect("configuration not resolved");
    assert_eq!(resolved.base_url, url);
}

#[then(expr = "the greeting is requested from {string}")]
fn greeting_requested_from(world: &mut BeaconWorld, url: String) {
    let requested = world.http.requested();
    assert!(
        requested.contains(&url),
        "expected a request to {}, got {:?}",
        url,
        requested
    );
}

#[then(expr = "the environment is {string}")]
fn environment_is(world: &mut BeaconWorld, tag: String) {
    let resolved = world.resolved.as_ref().expect("configuration not resolved");
    assert_eq!(resolved.environment, tag);
}

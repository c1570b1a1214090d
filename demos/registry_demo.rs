//! Registry walkthrough: descriptors, reducer compilation, store assembly

use serde_json::json;
use slicekit::{Registry, Store};

fn main() {
    println!("=== Registry Demo ===\n");

    // Describe every slice once at start-up
    let mut registry = Registry::new();
    registry
        .init(vec![
            Registry::create_model("UPDATE_SESSION", "session", json!({ "user": null }))
                .expect("valid descriptor"),
            Registry::create_model("UPDATE_PREFS", "prefs", json!({ "theme": "dark" }))
                .expect("valid descriptor"),
        ])
        .expect("registry init");

    println!("Registered slices: {}", registry.models().len());

    // Assemble the store from the compiled reducer map
    let store = Store::from_registry(&registry).expect("store assembly");
    println!("Initial state: {:#?}", store.get());

    // Build update actions by state key
    println!("\nLogging a user in...");
    let login = registry
        .update_action("session", json!({ "user": "ada" }))
        .expect("known state key");
    store.dispatch(&login);

    println!("\nSwitching theme...");
    let theme = registry
        .update_action("prefs", json!({ "theme": "light" }))
        .expect("known state key");
    store.dispatch(&theme);

    println!("\nFinal state: {:#?}", store.get());
}

//! Model binding walkthrough: the UI-facing read/update surface

use serde_json::json;
use slicekit::{Registry, SliceModel, Store};

fn main() {
    println!("=== Model Binding Demo ===\n");

    // One model per slice; the update action name is derived
    let model = SliceModel::new("profile", json!({ "name": "", "theme": "dark" }))
        .expect("valid model");
    println!("Derived update action: {}", model.update_action());

    let mut registry = Registry::new();
    registry.init(vec![model.descriptor()]).expect("registry init");
    let store = Store::from_registry(&registry).expect("store assembly");

    // A binding packages the current value and bound dispatchers,
    // the way a component would consume them on each render
    let binding = model.bind(&store);
    println!("Current value: {}", binding.value());
    println!("Bound update functions: {:?}", binding.update_names());

    println!("\nUpdating the name...");
    binding.update(json!({ "name": "ada" }));
    println!("Current value: {}", binding.value());

    println!("\nResetting the slice...");
    binding.reset();
    println!("Current value: {}", binding.value());

    // Render-prop style access
    model.with_value(&store, |value| {
        println!("\nConsumer sees: {value}");
    });
}

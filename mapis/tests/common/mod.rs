#![allow(dead_code)]

use mapis::{Dispatcher, Path, build, selectors::PathSelector, tables::ConstTable};
use serde_json::{Value, json};

// ============================================================================
// Test Values
// ============================================================================

pub fn circle(radius: f64) -> Value {
    json!({"kind": "circle", "radius": radius})
}

pub fn square(side: f64) -> Value {
    json!({"kind": "square", "side": side})
}

/// A drawing event carrying its shape one level down.
pub fn event(shape: Value) -> Value {
    json!({"id": 1, "shape": shape})
}

// ============================================================================
// Test Handlers
// ============================================================================

pub type Area = fn(&Value) -> f64;

pub fn circle_area(v: &Value) -> f64 {
    let r = v["radius"].as_f64().unwrap_or_default();
    std::f64::consts::PI * r * r
}

pub fn square_area(v: &Value) -> f64 {
    let s = v["side"].as_f64().unwrap_or_default();
    s * s
}

pub fn area_table() -> ConstTable<Area, 2> {
    ConstTable::new([
        ("circle", circle_area as Area),
        ("square", square_area as Area),
    ])
}

/// Dispatches on the top-level `kind` field.
pub fn area_dispatcher() -> Dispatcher<PathSelector, ConstTable<Area, 2>> {
    build(["kind"], Path::root(), area_table()).unwrap()
}

//! Dispatch over typed values and closed variant sets.
#![cfg(feature = "macros")]

use mapis::{
    BuildError, DispatchError, DispatcherBuilder, Path, ResolutionFailure, Selector, SelectorKey,
    Variants,
    selectors::{Accessor, field, key},
    testing::RecordingHandler,
};

#[derive(Debug, Clone, Copy, PartialEq, Variants)]
#[variants(rename_all = "lowercase")]
enum Kind {
    Circle,
    Square,
    #[variant(rename = "tri")]
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Variants)]
#[variants(rename_all = "snake_case")]
enum Command {
    Create { id: u32 },
    DeleteAll,
    Rename(u32, &'static str),
}

#[derive(Debug, Clone, PartialEq)]
struct Shape {
    kind: Kind,
    size: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Layer {
    shape: Option<Shape>,
}

#[derive(Debug, Clone, PartialEq)]
struct Document {
    layer: Layer,
}

fn document(kind: Kind, size: f64) -> Document {
    Document {
        layer: Layer {
            shape: Some(Shape { kind, size }),
        },
    }
}

fn shape_kind() -> impl Selector<Document> + Send + Sync {
    field("layer", |d: &Document| Some(&d.layer))
        .then(field("shape", |l: &Layer| l.shape.as_ref()))
        .then(key("kind", |s: &Shape| Some(&s.kind)))
}

fn size(d: &Document) -> f64 {
    d.layer.shape.as_ref().map_or(0.0, |s| s.size)
}

#[test]
fn test_derived_variant_keys() {
    assert_eq!(Kind::VARIANTS, &["circle", "square", "tri"]);
    assert_eq!(Kind::Triangle.variant_key(), "tri");
    assert_eq!(Kind::Circle.selector_key(), "circle");

    assert_eq!(Command::VARIANTS, &["create", "delete_all", "rename"]);
    assert_eq!(Command::Rename(1, "a").variant_key(), "rename");
    assert_eq!(Command::Create { id: 3 }.selector_key(), "create");
}

#[test]
fn test_typed_accessors_dispatch() {
    let d = DispatcherBuilder::<Document, (), f64>::new()
        .variants::<Kind>()
        .on(Kind::Circle, |d: &Document| 3.0 * size(d) * size(d))
        .on(Kind::Square, |d: &Document| size(d) * size(d))
        .on(Kind::Triangle, |d: &Document| size(d) * size(d) / 2.0)
        .build_with(shape_kind())
        .unwrap();

    assert_eq!(d.dispatch(&document(Kind::Square, 3.0), ()), Ok(9.0));
    assert_eq!(d.dispatch(&document(Kind::Triangle, 2.0), ()), Ok(2.0));
    assert_eq!(d.selector().path(), &Path::from(["layer", "shape", "kind"]));
}

#[test]
fn test_typed_accessor_absence_reported_at_step() {
    let recorder = RecordingHandler::<Document, (), ()>::new(());
    let d = DispatcherBuilder::<Document, (), ()>::new()
        .on(Kind::Circle, recorder.clone())
        .build_with(shape_kind())
        .unwrap();

    let empty = Document {
        layer: Layer { shape: None },
    };
    match d.dispatch(&empty, ()).unwrap_err() {
        DispatchError::PathResolution(e) => {
            assert_eq!(e.step, "shape");
            assert_eq!(e.index, 1);
            assert_eq!(e.reason, ResolutionFailure::MissingField);
        }
        other => panic!("expected a path failure, got {other:?}"),
    }
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_variant_set_checked_at_build() {
    let missing = DispatcherBuilder::<Document, (), f64>::new()
        .variants::<Kind>()
        .on(Kind::Circle, size)
        .on(Kind::Square, size)
        .build_with(shape_kind())
        .err();
    assert_eq!(missing, Some(BuildError::MissingHandlers(vec!["tri".to_string()])));

    let unknown = DispatcherBuilder::<Document, (), f64>::new()
        .variants::<Kind>()
        .on(Kind::Circle, size)
        .on(Kind::Square, size)
        .on(Kind::Triangle, size)
        .on("hexagon", size)
        .build_with(shape_kind())
        .err();
    assert_eq!(unknown, Some(BuildError::UnknownVariants(vec!["hexagon".to_string()])));
}

#[cfg(feature = "json")]
#[test]
fn test_string_path_over_json_with_derived_keys() {
    use serde_json::{Value, json};

    let d = DispatcherBuilder::<Value, (), &'static str>::new()
        .path(["command", "type"])
        .variants::<Command>()
        .on(Command::Create { id: 0 }, |_: &Value| "create")
        .on(Command::DeleteAll, |_: &Value| "delete")
        .on("rename", |_: &Value| "rename")
        .build()
        .unwrap();

    let value = json!({"command": {"type": "delete_all"}});
    assert_eq!(d.dispatch(&value, ()), Ok("delete"));
}

//! String path traversal over [`Traverse`] values.

use mapis_core::{Path, PathResolutionError, ResolutionFailure, Selector, Traverse};
use std::borrow::Cow;

/// Follows a [`Path`] field by field from the root of a value.
///
/// Each step reads one field of the current value. Reading a field of a
/// value that is not an object or array fails immediately, as does reading
/// a field that does not exist; nothing is carried forward as "undefined".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSelector {
    path: Path,
}

impl PathSelector {
    /// Create a selector following `path`.
    pub fn new(path: impl Into<Path>) -> Self {
        Self { path: path.into() }
    }

    /// Create a selector following `reduce ++ subset`.
    pub fn compose(reduce: impl Into<Path>, subset: impl Into<Path>) -> Self {
        let reduce = reduce.into();
        Self {
            path: reduce.join(&subset.into()),
        }
    }

    /// The full path this selector follows.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk `value` to the end of the path without interpreting the result.
    pub fn resolve<'v, T>(&self, value: &'v T) -> Result<&'v T, PathResolutionError>
    where
        T: Traverse + ?Sized,
    {
        let mut current = value;
        for (index, step) in self.path.iter().enumerate() {
            let kind = current.kind();
            if !kind.is_indexable() {
                return Err(PathResolutionError::new(
                    &self.path,
                    index,
                    ResolutionFailure::NotIndexable { found: kind },
                ));
            }
            current = current.field(step).ok_or_else(|| {
                PathResolutionError::new(&self.path, index, ResolutionFailure::MissingField)
            })?;
        }
        Ok(current)
    }
}

impl<T: Traverse + ?Sized> Selector<T> for PathSelector {
    fn path(&self) -> &Path {
        &self.path
    }

    fn select<'v>(&self, value: &'v T) -> Result<Cow<'v, str>, PathResolutionError> {
        let target = self.resolve(value)?;
        target.as_key().ok_or_else(|| {
            PathResolutionError::new(
                &self.path,
                self.path.len().saturating_sub(1),
                ResolutionFailure::NotAKey {
                    found: target.kind(),
                },
            )
        })
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use mapis_core::ValueKind;
    use serde_json::json;

    #[test]
    fn test_select_nested_key() {
        let selector = PathSelector::new(["shape", "kind"]);
        let value = json!({"shape": {"kind": "circle", "radius": 2}});
        assert_eq!(selector.select(&value).unwrap(), "circle");
    }

    #[test]
    fn test_null_intermediate_fails_at_next_step() {
        let selector = PathSelector::new(["shape", "kind"]);
        let err = selector.select(&json!({"shape": null})).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.step, "kind");
        assert_eq!(
            err.reason,
            ResolutionFailure::NotIndexable {
                found: ValueKind::Null
            }
        );
    }

    #[test]
    fn test_missing_field_fails_at_that_step() {
        let selector = PathSelector::new(["shape", "kind"]);
        let err = selector.select(&json!({"other": 1})).unwrap_err();
        assert_eq!(err.index, 0);
        assert_eq!(err.step, "shape");
        assert_eq!(err.reason, ResolutionFailure::MissingField);
    }

    #[test]
    fn test_scalar_intermediate_is_not_indexable() {
        let selector = PathSelector::new(["kind", "name"]);
        let err = selector.select(&json!({"kind": "circle"})).unwrap_err();
        assert_eq!(
            err.reason,
            ResolutionFailure::NotIndexable {
                found: ValueKind::String
            }
        );
    }

    #[test]
    fn test_object_is_not_a_key() {
        let selector = PathSelector::new(["shape"]);
        let err = selector.select(&json!({"shape": {"kind": "x"}})).unwrap_err();
        assert_eq!(err.step, "shape");
        assert_eq!(
            err.reason,
            ResolutionFailure::NotAKey {
                found: ValueKind::Object
            }
        );
    }

    #[test]
    fn test_array_steps_and_numeric_keys() {
        let selector = PathSelector::new(["layers", "0", "version"]);
        let value = json!({"layers": [{"version": 2}]});
        assert_eq!(selector.select(&value).unwrap(), "2");
    }

    #[test]
    fn test_compose_matches_single_path() {
        let composed = PathSelector::compose(["a", "b"], ["type"]);
        assert_eq!(composed, PathSelector::new(["a", "b", "type"]));
    }
}

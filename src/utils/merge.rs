//! Recursive merge of nested JSON mappings.

use serde_json::Value;

/// Merge `rhs` into `lhs` and return the result.
///
/// When both sides are objects, every key of `rhs` is merged into `lhs`
/// recursively and keys that only exist in `lhs` are kept. When either side
/// is not an object the result is `rhs` if `override_existing` is set,
/// otherwise `lhs`. The same rule applies at every nesting level.
///
/// # Examples
///
/// ```
/// use compass_utils::utils::merge::merge_dict;
/// use serde_json::json;
///
/// let merged = merge_dict(json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), true);
/// assert_eq!(merged, json!({"a": {"x": 1, "y": 2}}));
///
/// let kept = merge_dict(json!({"a": 1}), json!({"a": 2}), false);
/// assert_eq!(kept, json!({"a": 1}));
/// ```
pub fn merge_dict(mut lhs: Value, rhs: Value, override_existing: bool) -> Value {
    merge_into(&mut lhs, rhs, override_existing);
    lhs
}

/// In-place form of [`merge_dict`].
pub fn merge_into(lhs: &mut Value, rhs: Value, override_existing: bool) {
    match (lhs, rhs) {
        (Value::Object(lhs_map), Value::Object(rhs_map)) => {
            for (key, value) in rhs_map {
                match lhs_map.get_mut(&key) {
                    Some(existing) => merge_into(existing, value, override_existing),
                    None => {
                        lhs_map.insert(key, value);
                    }
                }
            }
        }
        (lhs, rhs) => {
            if override_existing {
                *lhs = rhs;
            }
        }
    }
}

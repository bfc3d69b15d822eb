//! セッション状態の部分更新（ディープマージ）

use serde_json::{Map, Value};

/// `source` を `target` に再帰的にマージする。
///
/// 同じキーの値が両方ともオブジェクトの場合のみ再帰し、それ以外は
/// `source` 側の値で丸ごと置き換える（オブジェクトをスカラーで置き換える場合も同様）。
pub fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        if let Value::Object(nested) = incoming {
            if let Some(Value::Object(existing)) = target.get_mut(&key) {
                deep_merge(existing, nested);
                continue;
            }
            target.insert(key, Value::Object(nested));
        } else {
            target.insert(key, incoming);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_merge_keeps_sibling_keys() {
        // テスト項目: ネストしたオブジェクトは兄弟キーを残したままマージされる
        // given (前提条件):
        let mut state = object(json!({"a": {"x": 1}}));

        // when (操作):
        deep_merge(&mut state, object(json!({"a": {"y": 2}})));

        // then (期待する結果):
        assert_eq!(Value::Object(state), json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_merge_replaces_object_with_scalar() {
        // テスト項目: オブジェクトにスカラーをマージすると丸ごと置き換わる
        // given (前提条件):
        let mut state = object(json!({"a": {"x": 1}, "b": true}));

        // when (操作):
        deep_merge(&mut state, object(json!({"a": 5})));

        // then (期待する結果):
        assert_eq!(Value::Object(state), json!({"a": 5, "b": true}));
    }

    #[test]
    fn test_merge_replaces_scalar_with_object() {
        // テスト項目: スカラーにオブジェクトをマージするとオブジェクトに置き換わる
        // given (前提条件):
        let mut state = object(json!({"a": "text"}));

        // when (操作):
        deep_merge(&mut state, object(json!({"a": {"nested": [1, 2]}})));

        // then (期待する結果):
        assert_eq!(Value::Object(state), json!({"a": {"nested": [1, 2]}}));
    }

    #[test]
    fn test_merge_replaces_arrays_without_concatenating() {
        // テスト項目: 配列は連結されず置き換えられる
        // given (前提条件):
        let mut state = object(json!({"list": [1, 2, 3]}));

        // when (操作):
        deep_merge(&mut state, object(json!({"list": [4]})));

        // then (期待する結果):
        assert_eq!(Value::Object(state), json!({"list": [4]}));
    }

    #[test]
    fn test_merge_recurses_several_levels() {
        // テスト項目: 深い階層でも再帰的にマージされる
        // given (前提条件):
        let mut state = object(json!({"game": {"stats": {"hits": 1, "misses": 2}}}));

        // when (操作):
        deep_merge(
            &mut state,
            object(json!({"game": {"stats": {"hits": 3}, "done": true}})),
        );

        // then (期待する結果):
        assert_eq!(
            Value::Object(state),
            json!({"game": {"stats": {"hits": 3, "misses": 2}, "done": true}})
        );
    }
}

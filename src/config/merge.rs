//! Top-level config merge
//!
//! Layers are plain JSON objects. Keys present in a later layer replace the
//! whole value from an earlier layer; nested objects are not merged.

use serde_json::{Map, Value};

/// A config layer or merged config: string keys to arbitrary JSON values.
pub type ConfigMap = Map<String, Value>;

/// Overlay `top` onto `base`. Colliding keys take the value from `top`.
pub fn overlay(mut base: ConfigMap, top: ConfigMap) -> ConfigMap {
    for (key, value) in top {
        base.insert(key, value);
    }
    base
}

/// Merge layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<ConfigMap>) -> ConfigMap {
    layers.into_iter().fold(ConfigMap::new(), overlay)
}

use crate::models::ProfileConfig;
use once_cell::sync::Lazy;
use serde_yaml::Value;

// Embed the built-in installer profiles at compile time
const DEFAULT_PROFILES_YAML: &str = include_str!("profiles.yaml");

static DEFAULT_PROFILES_VALUE: Lazy<Value> = Lazy::new(|| {
    serde_yaml::from_str(DEFAULT_PROFILES_YAML)
        .expect("Failed to parse default installer profiles - this is a bug")
});

// Parse the default profiles once at startup
pub static DEFAULT_PROFILES: Lazy<ProfileConfig> = Lazy::new(|| {
    serde_yaml::from_value(DEFAULT_PROFILES_VALUE.clone())
        .expect("Default installer profiles do not match the schema - this is a bug")
});

/// Merge user overrides onto the built-in profiles.
/// Overrides win field by field; anything they leave out keeps its default.
pub fn merge_with_defaults(overrides: Value) -> Result<ProfileConfig, serde_yaml::Error> {
    let mut merged = DEFAULT_PROFILES_VALUE.clone();
    deep_merge(&mut merged, overrides);
    serde_yaml::from_value(merged)
}

fn deep_merge(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Mapping(base_map), Value::Mapping(other_map)) => {
            for (key, value) in other_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // An empty document overrides nothing
        (_, Value::Null) => {}
        (base_val, other_val) => {
            *base_val = other_val;
        }
    }
}

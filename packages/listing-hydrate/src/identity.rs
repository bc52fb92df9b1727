use serde_json::{Map, Value};

/// Generate the identifier of a listing entry
///
/// MD5 over the compact JSON object `{"name", "website", "github"}`, in that
/// member order, with absent members left out. Identifiers therefore stay
/// stable across runs and match listings produced by earlier tooling.
pub fn record_id(name: Option<&str>, website: Option<&str>, github: Option<&str>) -> String {
    let mut fields = Map::new();
    for (key, value) in [("name", name), ("website", website), ("github", github)] {
        if let Some(value) = value {
            fields.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    let canonical = Value::Object(fields).to_string();
    format!("{:x}", md5::compute(canonical.as_bytes()))
}

use super::marker_shape::*;

use serde_json::json;

///
/// Trait implemented by types that can be converted to the JSON value passed to the map API
///
pub trait ToJsonValue {
    ///
    /// Creates a JSON representation of this item
    ///
    fn to_json(&self) -> serde_json::Value;
}

impl ToJsonValue for MarkerShape {
    ///
    /// Creates the marker shape literal, in the form `{ "type": "poly", "coords": [ ... ] }`
    ///
    fn to_json(&self) -> serde_json::Value {
        json!({
            "type":     self.shape_type().name(),
            "coords":   self.coordinates()
        })
    }
}

use super::error::*;

///
/// The coordinates a new marker shape starts with: a unit square around the origin, as a polygon
///
pub const DEFAULT_COORDINATES: [f64; 8] = [1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0];

///
/// True if a value can be used as a marker shape coordinate (ie, it's a finite real number)
///
#[inline]
pub fn is_coordinate(value: f64) -> bool {
    value.is_finite()
}

///
/// Reads a coordinate from some numeric-looking text
///
/// Whitespace around the number is ignored. Text that doesn't describe a finite number
/// (including `NaN` and `inf`) is rejected.
///
pub fn parse_coordinate(text: &str) -> Result<f64, MarkerShapeError> {
    match text.trim().parse::<f64>() {
        Ok(value) if is_coordinate(value)   => Ok(value),
        _                                   => Err(MarkerShapeError::NonNumericCoordinate(text.to_string())),
    }
}

///
/// A coordinate as it appears in a configuration file: either a number or some text containing a number
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    ///
    /// Converts this value to a finite number, or returns an error if it's not a number
    ///
    pub fn to_f64(&self) -> Result<f64, MarkerShapeError> {
        match self {
            CoordinateValue::Number(value) => {
                if is_coordinate(*value) {
                    Ok(*value)
                } else {
                    Err(MarkerShapeError::NonNumericCoordinate(value.to_string()))
                }
            }

            CoordinateValue::Text(text) => parse_coordinate(text),
        }
    }
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> CoordinateValue {
        CoordinateValue::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(text: &str) -> CoordinateValue {
        CoordinateValue::Text(text.to_string())
    }
}

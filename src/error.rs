use super::shape_type::*;

use std::error::Error;
use std::fmt;

///
/// Reasons a change to a marker shape can be rejected
///
/// Every variant is an invalid argument: the shape that was being changed is left
/// exactly as it was before the call.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MarkerShapeError {
    /// The shape type was not one of `circle`, `poly` or `rect` (the rejected text is included)
    InvalidType(String),

    /// The coordinates don't have the arity or values required by the shape type
    InvalidCoordinates(MarkerShapeType),

    /// Tried to append a polygon point to a shape that is not a polygon
    NotPolygon(MarkerShapeType),

    /// One of the x or y values appended to a polygon was not a finite number
    NonNumericPolyCoordinate,

    /// Some text could not be read as a finite number
    NonNumericCoordinate(String),
}

impl MarkerShapeError {
    ///
    /// The operation that produced this error
    ///
    pub fn operation(&self) -> &'static str {
        use self::MarkerShapeError::*;

        match self {
            InvalidType(_)              => "set_type",
            InvalidCoordinates(_)       => "set_coordinates",
            NotPolygon(_)               => "add_poly_coordinate",
            NonNumericPolyCoordinate    => "add_poly_coordinate",
            NonNumericCoordinate(_)     => "parse_coordinate",
        }
    }
}

impl fmt::Display for MarkerShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::MarkerShapeError::*;

        match self {
            InvalidType(rejected) => {
                let allowed = MarkerShapeType::ALL.iter().map(|shape_type| shape_type.name()).collect::<Vec<_>>().join(", ");
                write!(f, "{}: '{}' is not a marker shape type. The type of a marker shape can only be : {}", self.operation(), rejected, allowed)
            }

            InvalidCoordinates(shape_type) => {
                write!(f, "{}: the coordinates are invalid for a marker shape of type {}. The available prototype is : {}({})",
                    self.operation(), shape_type, self.operation(), shape_type.coordinate_signature())
            }

            NotPolygon(shape_type) => {
                write!(f, "{}: this method can only be used with a marker shape of type {} (the shape has type {})", self.operation(), MarkerShapeType::Poly, shape_type)
            }

            NonNumericPolyCoordinate => {
                write!(f, "{}: the x & y coordinates of a {} marker shape must be finite numeric values", self.operation(), MarkerShapeType::Poly)
            }

            NonNumericCoordinate(text) => {
                write!(f, "{}: '{}' is not a finite numeric coordinate", self.operation(), text)
            }
        }
    }
}

impl Error for MarkerShapeError { }

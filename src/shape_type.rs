use super::error::*;

use std::convert::TryFrom;
use std::str::FromStr;
use std::fmt;

///
/// The kinds of region a marker shape can describe
///
/// The names match the values accepted by the `type` field of a map API marker shape.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MarkerShapeType {
    /// A circle, described as `[x, y, radius]`
    Circle,

    /// A closed polygon, described as `[x1, y1, ..., xn, yn]`
    Poly,

    /// A rectangle, described by two opposite corners as `[x1, y1, x2, y2]`
    Rect,
}

impl MarkerShapeType {
    /// Every shape type, in the order they are listed in error messages
    pub const ALL: [MarkerShapeType; 3] = [MarkerShapeType::Circle, MarkerShapeType::Poly, MarkerShapeType::Rect];

    ///
    /// The canonical (lower case) name of this shape type
    ///
    pub fn name(&self) -> &'static str {
        match self {
            MarkerShapeType::Circle => "circle",
            MarkerShapeType::Poly   => "poly",
            MarkerShapeType::Rect   => "rect",
        }
    }

    ///
    /// True if a coordinate list with the specified number of elements has the right arity for this type
    ///
    pub fn accepts_coordinate_count(&self, count: usize) -> bool {
        match self {
            MarkerShapeType::Circle => count == 3,
            MarkerShapeType::Poly   => count > 0 && count % 2 == 0,
            MarkerShapeType::Rect   => count == 4,
        }
    }

    ///
    /// Describes the coordinate list this type expects, for use in error messages
    ///
    pub fn coordinate_signature(&self) -> &'static str {
        match self {
            MarkerShapeType::Circle => "&[x, y, r]",
            MarkerShapeType::Poly   => "&[x1, y1, ..., xn, yn]",
            MarkerShapeType::Rect   => "&[x1, y1, x2, y2]",
        }
    }
}

impl Default for MarkerShapeType {
    fn default() -> Self {
        MarkerShapeType::Poly
    }
}

impl fmt::Display for MarkerShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MarkerShapeType {
    type Err = MarkerShapeError;

    ///
    /// Reads a shape type name, ignoring case
    ///
    fn from_str(name: &str) -> Result<MarkerShapeType, MarkerShapeError> {
        MarkerShapeType::ALL.iter()
            .find(|shape_type| shape_type.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| MarkerShapeError::InvalidType(name.to_string()))
    }
}

impl TryFrom<String> for MarkerShapeType {
    type Error = MarkerShapeError;

    fn try_from(name: String) -> Result<MarkerShapeType, MarkerShapeError> {
        MarkerShapeType::from_str(&name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn circle_arity() {
        assert!(MarkerShapeType::Circle.accepts_coordinate_count(3));
        assert!(!MarkerShapeType::Circle.accepts_coordinate_count(2));
        assert!(!MarkerShapeType::Circle.accepts_coordinate_count(4));
    }

    #[test]
    fn poly_arity() {
        assert!(!MarkerShapeType::Poly.accepts_coordinate_count(0));
        assert!(!MarkerShapeType::Poly.accepts_coordinate_count(1));
        assert!(MarkerShapeType::Poly.accepts_coordinate_count(2));
        assert!(!MarkerShapeType::Poly.accepts_coordinate_count(7));
        assert!(MarkerShapeType::Poly.accepts_coordinate_count(8));
    }

    #[test]
    fn rect_arity() {
        assert!(MarkerShapeType::Rect.accepts_coordinate_count(4));
        assert!(!MarkerShapeType::Rect.accepts_coordinate_count(3));
        assert!(!MarkerShapeType::Rect.accepts_coordinate_count(6));
    }
}

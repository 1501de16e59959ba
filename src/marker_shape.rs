use super::error::*;
use super::shape_type::*;
use super::coordinate::*;
use super::variable_name::*;

use serde::{Serialize, Serializer};
use serde::ser::{self, SerializeStruct};

use std::convert::TryFrom;

///
/// Describes the clickable region of a map marker
///
/// A marker shape is a circle, polygon or rectangle together with the list of coordinates
/// for that shape. The coordinates are checked against the type whenever they are set or
/// added to: a rejected change leaves the shape as it was.
///
/// Changing the type does not check the existing coordinates. Set new coordinates after
/// changing the type, use `set_shape()` to change both at once, or use `coordinates_match_type()`
/// to see if the two agree.
///
/// Only a shape whose coordinates match its type can be serialized, so anything that is written
/// out can be read back in.
///
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "MarkerShapeConfig")]
pub struct MarkerShape {
    /// The JavaScript variable that will hold this shape
    variable_name: String,

    /// The kind of region described by the coordinates
    shape_type: MarkerShapeType,

    /// The coordinates of the shape, interpreted according to its type
    coordinates: Vec<f64>,
}

///
/// The configuration form of a marker shape
///
/// Every field is optional: missing fields take the same value as they do for `MarkerShape::new()`.
/// Coordinates may be written as numbers or as numeric text.
///
/// Unknown fields are rejected, so a misspelt key is reported rather than replaced by a default.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct MarkerShapeConfig {
    #[serde(rename = "type", default)]
    pub shape_type: Option<MarkerShapeType>,

    #[serde(alias = "coords", default)]
    pub coordinates: Option<Vec<CoordinateValue>>,

    #[serde(default)]
    pub variable_name: Option<String>,
}

///
/// Checks a list of coordinates against the rules for a shape type
///
fn check_coordinates(shape_type: MarkerShapeType, coordinates: &[f64]) -> Result<(), MarkerShapeError> {
    if shape_type.accepts_coordinate_count(coordinates.len()) && coordinates.iter().all(|value| is_coordinate(*value)) {
        Ok(())
    } else {
        Err(MarkerShapeError::InvalidCoordinates(shape_type))
    }
}

impl MarkerShape {
    ///
    /// Creates a polygon marker shape covering the unit square, with a unique variable name
    ///
    pub fn new() -> MarkerShape {
        MarkerShape::with_variable_names(&UniqueVariableNames)
    }

    ///
    /// Creates a polygon marker shape covering the unit square, taking its variable name from the specified generator
    ///
    pub fn with_variable_names(names: &dyn JavascriptVariableNames) -> MarkerShape {
        MarkerShape {
            variable_name:  names.variable_name(MARKER_SHAPE_PREFIX),
            shape_type:     MarkerShapeType::default(),
            coordinates:    DEFAULT_COORDINATES.to_vec(),
        }
    }

    ///
    /// The name of the JavaScript variable that holds this shape
    ///
    #[inline]
    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    ///
    /// Changes the name of the JavaScript variable that holds this shape
    ///
    pub fn set_variable_name<TName: Into<String>>(&mut self, variable_name: TName) {
        self.variable_name = variable_name.into();
    }

    ///
    /// The type of this shape
    ///
    #[inline]
    pub fn shape_type(&self) -> MarkerShapeType {
        self.shape_type
    }

    ///
    /// Changes the type of this shape
    ///
    /// The existing coordinates are kept as they are, even if they don't suit the new type.
    ///
    pub fn set_type(&mut self, shape_type: MarkerShapeType) {
        self.shape_type = shape_type;

        // Normal when the caller is about to set coordinates for the new type
        if !self.coordinates_match_type() {
            debug!("Marker shape {} changed to type {} and its {} coordinates are not valid for that type yet", self.variable_name, shape_type, self.coordinates.len());
        } else {
            trace!("Marker shape {} changed to type {}", self.variable_name, shape_type);
        }
    }

    ///
    /// Changes the type and the coordinates of this shape together
    ///
    /// The coordinates are checked against the new type, and if they are rejected neither
    /// the type nor the coordinates are changed.
    ///
    pub fn set_shape(&mut self, shape_type: MarkerShapeType, coordinates: &[f64]) -> Result<(), MarkerShapeError> {
        check_coordinates(shape_type, coordinates)?;

        trace!("Marker shape {} is now a {} with {} coordinates", self.variable_name, shape_type, coordinates.len());
        self.shape_type     = shape_type;
        self.coordinates    = coordinates.to_vec();

        Ok(())
    }

    ///
    /// Changes the type of this shape from its name (`circle`, `poly` or `rect`, in any case)
    ///
    pub fn set_type_name(&mut self, name: &str) -> Result<(), MarkerShapeError> {
        let shape_type = name.parse::<MarkerShapeType>()?;
        self.set_type(shape_type);

        Ok(())
    }

    ///
    /// True if this shape has any coordinates
    ///
    #[inline]
    pub fn has_coordinates(&self) -> bool {
        !self.coordinates.is_empty()
    }

    ///
    /// The coordinates of this shape
    ///
    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    ///
    /// Replaces the coordinates of this shape
    ///
    /// A circle needs `[x, y, r]`, a rectangle needs `[x1, y1, x2, y2]` and a polygon needs
    /// at least one `x, y` pair. Every value must be a finite number.
    ///
    pub fn set_coordinates(&mut self, coordinates: &[f64]) -> Result<(), MarkerShapeError> {
        check_coordinates(self.shape_type, coordinates)?;

        trace!("Marker shape {} ({}) now has {} coordinates", self.variable_name, self.shape_type, coordinates.len());
        self.coordinates = coordinates.to_vec();

        Ok(())
    }

    ///
    /// Replaces the coordinates of this shape with values read from text
    ///
    pub fn set_coordinates_from_text(&mut self, coordinates: &[&str]) -> Result<(), MarkerShapeError> {
        let shape_type  = self.shape_type;
        let coordinates = coordinates.iter()
            .map(|text| parse_coordinate(text))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| MarkerShapeError::InvalidCoordinates(shape_type))?;

        self.set_coordinates(&coordinates)
    }

    ///
    /// Adds a point to the end of a polygon shape
    ///
    pub fn add_poly_coordinate(&mut self, x: f64, y: f64) -> Result<(), MarkerShapeError> {
        if self.shape_type != MarkerShapeType::Poly {
            return Err(MarkerShapeError::NotPolygon(self.shape_type));
        }

        if !is_coordinate(x) || !is_coordinate(y) {
            return Err(MarkerShapeError::NonNumericPolyCoordinate);
        }

        self.coordinates.push(x);
        self.coordinates.push(y);

        trace!("Marker shape {} added point ({}, {}), now has {} coordinates", self.variable_name, x, y, self.coordinates.len());

        Ok(())
    }

    ///
    /// True if the current coordinates are valid for the current type
    ///
    pub fn coordinates_match_type(&self) -> bool {
        check_coordinates(self.shape_type, &self.coordinates).is_ok()
    }
}

impl Default for MarkerShape {
    fn default() -> Self {
        MarkerShape::new()
    }
}

impl Serialize for MarkerShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        check_coordinates(self.shape_type, &self.coordinates).map_err(<S::Error as ser::Error>::custom)?;

        let mut shape = serializer.serialize_struct("MarkerShape", 3)?;
        shape.serialize_field("variable_name", &self.variable_name)?;
        shape.serialize_field("type", &self.shape_type)?;
        shape.serialize_field("coordinates", &self.coordinates)?;
        shape.end()
    }
}

impl TryFrom<MarkerShapeConfig> for MarkerShape {
    type Error = MarkerShapeError;

    fn try_from(config: MarkerShapeConfig) -> Result<MarkerShape, MarkerShapeError> {
        let shape_type      = config.shape_type.unwrap_or_default();
        let variable_name   = config.variable_name.unwrap_or_else(|| UniqueVariableNames.variable_name(MARKER_SHAPE_PREFIX));

        let coordinates     = match config.coordinates {
            Some(values)    => values.iter()
                .map(|value| value.to_f64())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| MarkerShapeError::InvalidCoordinates(shape_type))?,
            None            => DEFAULT_COORDINATES.to_vec(),
        };

        // A configured shape must be consistent, so a circle or rectangle can't rely on the polygon defaults
        check_coordinates(shape_type, &coordinates)?;

        Ok(MarkerShape { variable_name, shape_type, coordinates })
    }
}

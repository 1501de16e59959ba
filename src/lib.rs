//!
//! # Marker shapes for JavaScript map overlays
//!
//! A `MarkerShape` describes the clickable region of a map marker: a circle,
//! a polygon or a rectangle, together with the coordinate list for that shape.
//! Every change to the coordinates is validated against the shape type, and each
//! shape carries the JavaScript variable name used when it's written out as part
//! of a generated map script.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate serde;
extern crate serde_json;
extern crate uuid;

mod error;
mod shape_type;
mod coordinate;
mod variable_name;
mod marker_shape;
mod json;

pub use self::error::*;
pub use self::shape_type::*;
pub use self::coordinate::*;
pub use self::variable_name::*;
pub use self::marker_shape::*;
pub use self::json::*;

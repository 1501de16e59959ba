use uuid::*;

use std::sync::atomic::{AtomicUsize, Ordering};

/// The prefix used for the JavaScript variables that hold marker shapes
pub const MARKER_SHAPE_PREFIX: &str = "marker_shape_";

///
/// Assigns the names of the JavaScript variables used to hold generated objects
///
/// Names are built from a prefix describing the kind of object (for example
/// `marker_shape_`). Implementations must return a different name each time they
/// are called, and the names must be valid JavaScript identifiers as long as the
/// prefix is.
///
pub trait JavascriptVariableNames {
    ///
    /// Returns a new variable name starting with the specified prefix
    ///
    fn variable_name(&self, prefix: &str) -> String;
}

///
/// Generates variable names by adding a random UUID to the prefix
///
#[derive(Copy, Clone, Debug, Default)]
pub struct UniqueVariableNames;

impl JavascriptVariableNames for UniqueVariableNames {
    fn variable_name(&self, prefix: &str) -> String {
        // The simple format is hex digits only, so it can be appended to an identifier
        format!("{}{}", prefix, Uuid::new_v4().simple())
    }
}

///
/// Generates variable names by adding an increasing counter to the prefix
///
/// The counter is shared by every prefix, so `marker_shape_0` and `marker_0` are never
/// both generated by the same instance.
///
#[derive(Debug, Default)]
pub struct SequentialVariableNames {
    next_index: AtomicUsize,
}

impl SequentialVariableNames {
    ///
    /// Creates a generator whose first name ends in `0`
    ///
    pub fn new() -> SequentialVariableNames {
        SequentialVariableNames::starting_at(0)
    }

    ///
    /// Creates a generator whose first name ends in the specified index
    ///
    pub fn starting_at(first_index: usize) -> SequentialVariableNames {
        SequentialVariableNames {
            next_index: AtomicUsize::new(first_index)
        }
    }
}

impl JavascriptVariableNames for SequentialVariableNames {
    fn variable_name(&self, prefix: &str) -> String {
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);

        format!("{}{}", prefix, index)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sequential_names_share_one_counter() {
        let names = SequentialVariableNames::starting_at(3);

        assert!(names.variable_name(MARKER_SHAPE_PREFIX) == "marker_shape_3");
        assert!(names.variable_name("marker_") == "marker_4");
        assert!(names.variable_name(MARKER_SHAPE_PREFIX) == "marker_shape_5");
    }

    #[test]
    fn unique_names_are_identifiers() {
        let name = UniqueVariableNames.variable_name(MARKER_SHAPE_PREFIX);

        assert!(name.starts_with(MARKER_SHAPE_PREFIX));
        assert!(name.len() == MARKER_SHAPE_PREFIX.len() + 32);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}

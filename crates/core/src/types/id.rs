//! Newtype IDs for type-safe entity references.
//!
//! Gateway identifiers are opaque numeric handles. Use the `define_id!` macro
//! to create wrappers that prevent accidentally mixing IDs from different
//! entity types (deleting a meal with a workout ID, for example).

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
/// - `FromStr` so IDs can be taken from CLI arguments
///
/// # Example
///
/// ```rust
/// # use lifeguard_core::define_id;
/// define_id!(MealId);
/// define_id!(WorkoutId);
///
/// let meal_id = MealId::new(1);
/// let workout_id = WorkoutId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: MealId = workout_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Gateway-assigned entity IDs
define_id!(UserId);
define_id!(WorkoutId);
define_id!(ExerciseId);
define_id!(MealId);
define_id!(WaterLogId);
define_id!(ShoppingItemId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_transparently() {
        let id = MealId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: ShoppingItemId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ShoppingItemId::new(7));
    }

    #[test]
    fn test_id_from_str_trims() {
        let id: WorkoutId = " 13 ".parse().unwrap();
        assert_eq!(id.as_i64(), 13);
        assert!("abc".parse::<WorkoutId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ShoppingItemId::new(7).to_string(), "7");
    }
}

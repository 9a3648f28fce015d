//! Core types for Lifeguard.
//!
//! This module provides type-safe wrappers for gateway identifiers and the
//! closed enumerations used to classify records.

pub mod id;
pub mod kinds;

pub use id::*;
pub use kinds::{MealType, ParseKindError, ShoppingCategory, WorkoutType};

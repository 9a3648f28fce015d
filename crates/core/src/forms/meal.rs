use chrono::NaiveDate;

use super::{DraftError, optional_text, parse_optional_float, parse_optional_int, required_name};
use crate::models::NewMeal;
use crate::types::MealType;

/// The new-meal form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub meal_type: MealType,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
    pub serving_size: String,
    pub notes: String,
}

impl MealDraft {
    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Convert into a creation request for `meal_date`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingName`] when the name is blank.
    pub fn to_request(&self, meal_date: NaiveDate) -> Result<NewMeal, DraftError> {
        Ok(NewMeal {
            name: required_name(&self.name)?,
            meal_type: self.meal_type,
            calories: parse_optional_int(&self.calories),
            protein: parse_optional_float(&self.protein),
            carbs: parse_optional_float(&self.carbs),
            fat: parse_optional_float(&self.fat),
            fiber: parse_optional_float(&self.fiber),
            serving_size: optional_text(&self.serving_size),
            notes: optional_text(&self.notes),
            meal_date,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_calories_present_protein_omitted() {
        let draft = MealDraft {
            name: "Oatmeal".to_string(),
            meal_type: MealType::Breakfast,
            calories: "400".to_string(),
            protein: String::new(),
            ..MealDraft::default()
        };

        let request = draft.to_request(today()).unwrap();
        assert_eq!(request.calories, Some(400));
        assert_eq!(request.protein, None);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["calories"], 400);
        assert!(json.get("protein").is_none());
        assert!(json.get("serving_size").is_none());
        assert_eq!(json["meal_date"], "2026-10-18");
    }

    #[test]
    fn test_decimal_macros_and_text_fields() {
        let draft = MealDraft {
            name: "  Salmon bowl ".to_string(),
            meal_type: MealType::Dinner,
            protein: "32.5".to_string(),
            fat: "abc".to_string(),
            serving_size: " 1 bowl ".to_string(),
            notes: "   ".to_string(),
            ..MealDraft::default()
        };

        let request = draft.to_request(today()).unwrap();
        assert_eq!(request.name, "Salmon bowl");
        assert_eq!(request.protein, Some(32.5));
        assert_eq!(request.fat, None);
        assert_eq!(request.serving_size.as_deref(), Some("1 bowl"));
        assert_eq!(request.notes, None);
    }

    #[test]
    fn test_blank_name_is_refused() {
        let draft = MealDraft {
            name: "  ".to_string(),
            calories: "100".to_string(),
            ..MealDraft::default()
        };

        assert!(!draft.can_submit());
        assert_eq!(draft.to_request(today()), Err(DraftError::MissingName));
    }

    #[test]
    fn test_default_meal_type_is_lunch() {
        assert_eq!(MealDraft::default().meal_type, MealType::Lunch);
    }
}

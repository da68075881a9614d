//! Macro totals
//!
//! Summed calories and macros for a slot, a day, or any list of meals.

use serde::{Deserialize, Serialize};

use super::Meal;

/// Calorie and macro totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTotal {
    pub calories: u64,
    pub protein: u64, // grams
    pub carbs: u64,   // grams
    pub fat: u64,     // grams
}

impl NutritionTotal {
    /// All zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another total to this one
    pub fn add(&self, other: &NutritionTotal) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl From<&Meal> for NutritionTotal {
    fn from(meal: &Meal) -> Self {
        Self {
            calories: u64::from(meal.calories),
            protein: u64::from(meal.protein),
            carbs: u64::from(meal.carbs),
            fat: u64::from(meal.fat),
        }
    }
}

impl std::ops::Add for NutritionTotal {
    type Output = NutritionTotal;

    fn add(self, other: NutritionTotal) -> NutritionTotal {
        NutritionTotal::add(&self, &other)
    }
}

impl std::iter::Sum for NutritionTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionTotal::zero(), |acc, n| acc + n)
    }
}

/// Sum calories and macros across meals
pub fn total_of<'a, I>(meals: I) -> NutritionTotal
where
    I: IntoIterator<Item = &'a Meal>,
{
    meals.into_iter().map(NutritionTotal::from).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealId;

    fn meal(id: u64, calories: u32, protein: u32, carbs: u32, fat: u32) -> Meal {
        Meal {
            id: MealId(id),
            name: format!("meal {}", id),
            calories,
            protein,
            carbs,
            fat,
        }
    }

    #[test]
    fn test_total_of_empty() {
        let meals: Vec<Meal> = Vec::new();
        assert_eq!(total_of(&meals), NutritionTotal::zero());
    }

    #[test]
    fn test_total_of_two_meals() {
        let meals = vec![meal(1, 300, 20, 30, 10), meal(2, 200, 10, 20, 5)];
        assert_eq!(
            total_of(&meals),
            NutritionTotal { calories: 500, protein: 30, carbs: 50, fat: 15 }
        );
    }

    #[test]
    fn test_total_does_not_overflow_u32() {
        let meals = vec![meal(1, u32::MAX, 0, 0, 0), meal(2, u32::MAX, 0, 0, 0)];
        assert_eq!(total_of(&meals).calories, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_add_operator() {
        let a = NutritionTotal { calories: 1, protein: 2, carbs: 3, fat: 4 };
        let b = NutritionTotal { calories: 10, protein: 20, carbs: 30, fat: 40 };
        assert_eq!(a + b, NutritionTotal { calories: 11, protein: 22, carbs: 33, fat: 44 });
    }
}

//! Meal plan catalog and calorie-band matching
//!
//! A meal plan covers an inclusive calorie band. Matching a daily calorie
//! target is a linear scan in catalog order; the first band containing the
//! target wins.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::{uuid, Uuid};

/// Anything that covers an inclusive band of daily calories
pub trait CalorieBand {
    fn calorie_range(&self) -> RangeInclusive<i32>;
}

/// One entry of the meal plan catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub plan_id: Uuid,
    pub calorie_range_min: i32,
    pub calorie_range_max: i32,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
    pub portions_multiplier: f64,
}

impl CalorieBand for MealPlan {
    fn calorie_range(&self) -> RangeInclusive<i32> {
        self.calorie_range_min..=self.calorie_range_max
    }
}

/// Find the first plan whose band contains `calories`
pub fn find_meal_plan<P: CalorieBand>(calories: i32, plans: &[P]) -> Option<&P> {
    plans
        .iter()
        .find(|plan| plan.calorie_range().contains(&calories))
}

/// Index pairs `(earlier, later)` of bands that share at least one calorie value
pub fn overlapping_bands<P: CalorieBand>(plans: &[P]) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();
    for (i, a) in plans.iter().enumerate() {
        let a = a.calorie_range();
        for (j, b) in plans.iter().enumerate().skip(i + 1) {
            let b = b.calorie_range();
            if a.start() <= b.end() && b.start() <= a.end() {
                overlaps.push((i, j));
            }
        }
    }
    overlaps
}

fn plan(
    plan_id: Uuid,
    range: (i32, i32),
    breakfast: &str,
    lunch: &str,
    dinner: &str,
    snacks: &str,
) -> MealPlan {
    MealPlan {
        plan_id,
        calorie_range_min: range.0,
        calorie_range_max: range.1,
        breakfast: breakfast.to_string(),
        lunch: lunch.to_string(),
        dinner: dinner.to_string(),
        snacks: snacks.to_string(),
        portions_multiplier: 1.0,
    }
}

/// Seed catalog, ordered by calorie band
pub fn default_meal_plans() -> Vec<MealPlan> {
    vec![
        plan(
            uuid!("c47b4ef6-3567-4495-8d11-261c4a7c5417"),
            (1200, 1400),
            "Greek yogurt with berries + 10 almonds",
            "Grilled chicken salad with olive oil & vinegar",
            "Baked salmon (100g), steamed broccoli, and ½ cup brown rice",
            "1 boiled egg + ½ apple, Carrot sticks with 1 tbsp hummus",
        ),
        plan(
            uuid!("9f5a9b2c-0123-4456-7890-abcdef123456"),
            (1500, 1700),
            "Oatmeal with banana and peanut butter",
            "Turkey wrap with veggies + small fruit",
            "Stir-fried tofu, vegetables, 1 cup quinoa",
            "Low-fat cottage cheese + peach, Protein shake with water",
        ),
        plan(
            uuid!("e8d7c6b5-a432-1098-7654-321fedcba987"),
            (1800, 2000),
            "2 scrambled eggs, whole grain toast, orange",
            "Grilled chicken sandwich, sweet potato wedges",
            "Beef stir-fry with rice and vegetables",
            "Trail mix (30g), Greek yogurt + chia seeds",
        ),
        plan(
            uuid!("b1a2c3d4-e5f6-7890-1234-567890abcdef"),
            (2200, 2500),
            "3 eggs, oatmeal with honey and banana",
            "Chicken breast, pasta, olive oil, side salad",
            "Grilled salmon, couscous, roasted veggies",
            "Peanut butter on toast + milk, Protein smoothie with fruit and oats",
        ),
        plan(
            uuid!("d4c3b2a1-9876-5432-1098-765432109876"),
            (2700, 3000),
            "Omelet with 4 eggs, cheese, toast, fruit juice",
            "Steak wrap, rice, avocado, fruit",
            "Chicken, sweet potatoes, mixed vegetables, olive oil drizzle",
            "Granola bar + protein shake, Nuts, yogurt, banana",
        ),
    ]
}

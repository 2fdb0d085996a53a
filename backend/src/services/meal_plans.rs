//! Meal plan service - catalog seeding, loading and matching

use crate::repositories::MealPlanRepository;
use anyhow::Result;
use async_trait::async_trait;
use diet_tracker_shared::meal_plans::{
    default_meal_plans, find_meal_plan, overlapping_bands, MealPlan,
};
use sqlx::PgPool;
use tracing::{debug, info, warn};

/// Counter of meal plan lookups, labelled by outcome
pub const MEAL_PLAN_MATCHES_TOTAL: &str = "diet_tracker_meal_plan_matches_total";

/// Storage holding the meal plan catalog
#[async_trait]
pub trait MealPlanStore: Send + Sync {
    async fn count(&self) -> Result<i64>;
    async fn list_all(&self) -> Result<Vec<MealPlan>>;
    async fn insert_all(&self, plans: &[MealPlan]) -> Result<u64>;
}

#[async_trait]
impl MealPlanStore for PgPool {
    async fn count(&self) -> Result<i64> {
        MealPlanRepository::count(self).await
    }

    async fn list_all(&self) -> Result<Vec<MealPlan>> {
        let records = MealPlanRepository::list_all(self).await?;
        Ok(records.into_iter().map(MealPlan::from).collect())
    }

    async fn insert_all(&self, plans: &[MealPlan]) -> Result<u64> {
        MealPlanRepository::insert_all(self, plans).await
    }
}

/// What [`MealPlanService::initialize`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held this many plans; nothing was written
    AlreadyPresent(i64),
    /// The store was empty and this many seed plans were inserted
    Seeded(u64),
}

/// Meal plan service
pub struct MealPlanService;

impl MealPlanService {
    /// Insert the built-in catalog if the store is empty
    pub async fn initialize<S: MealPlanStore + ?Sized>(store: &S) -> Result<SeedOutcome> {
        let existing = store.count().await?;
        if existing > 0 {
            debug!(existing, "Meal plan catalog already present");
            return Ok(SeedOutcome::AlreadyPresent(existing));
        }

        let seeded = store.insert_all(&default_meal_plans()).await?;
        info!(seeded, "Seeded meal plan catalog");
        Ok(SeedOutcome::Seeded(seeded))
    }

    /// Load the catalog the service will match against
    ///
    /// Falls back to the built-in catalog when the store is unreachable or
    /// empty, so matching keeps working without a database.
    pub async fn load_catalog<S: MealPlanStore + ?Sized>(store: &S) -> Vec<MealPlan> {
        let catalog = match store.list_all().await {
            Ok(plans) if !plans.is_empty() => plans,
            Ok(_) => {
                warn!("Meal plan table is empty, using built-in catalog");
                default_meal_plans()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load meal plans, using built-in catalog");
                default_meal_plans()
            }
        };

        for (a, b) in overlapping_bands(&catalog) {
            warn!(
                first = %catalog[a].plan_id,
                second = %catalog[b].plan_id,
                "Meal plan calorie bands overlap; the first plan wins"
            );
        }

        info!(plans = catalog.len(), "Meal plan catalog loaded");
        catalog
    }

    /// Plan covering `calories`, if any
    pub fn match_for_calories(catalog: &[MealPlan], calories: i32) -> Option<&MealPlan> {
        let matched = find_meal_plan(calories, catalog);
        let outcome = if matched.is_some() { "true" } else { "false" };
        metrics::counter!(MEAL_PLAN_MATCHES_TOTAL, "matched" => outcome).increment(1);
        debug!(calories, matched = matched.is_some(), "Meal plan lookup");
        matched
    }
}

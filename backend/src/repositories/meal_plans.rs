//! Meal plan catalog repository for database operations

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use diet_tracker_shared::meal_plans::MealPlan;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Meal plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealPlanRecord {
    pub plan_id: Uuid,
    pub calorie_range_min: i32,
    pub calorie_range_max: i32,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
    pub portions_multiplier: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<MealPlanRecord> for MealPlan {
    fn from(record: MealPlanRecord) -> Self {
        MealPlan {
            plan_id: record.plan_id,
            calorie_range_min: record.calorie_range_min,
            calorie_range_max: record.calorie_range_max,
            breakfast: record.breakfast,
            lunch: record.lunch,
            dinner: record.dinner,
            snacks: record.snacks,
            portions_multiplier: record.portions_multiplier.to_f64().unwrap_or(1.0),
        }
    }
}

/// Meal plan repository for database operations
pub struct MealPlanRepository;

impl MealPlanRepository {
    /// All plans in catalog order
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MealPlanRecord>> {
        let records = sqlx::query_as::<_, MealPlanRecord>(
            r#"
            SELECT plan_id, calorie_range_min, calorie_range_max, breakfast, lunch, dinner,
                   snacks, portions_multiplier, created_at
            FROM meal_plans
            ORDER BY created_at, calorie_range_min, plan_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Number of plans in the catalog
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meal_plans")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Insert plans in one transaction; plans whose id already exists are skipped
    ///
    /// Returns the number of rows actually inserted.
    pub async fn insert_all(pool: &PgPool, plans: &[MealPlan]) -> Result<u64> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for plan in plans {
            let multiplier = Decimal::try_from(plan.portions_multiplier)
                .with_context(|| format!("invalid portions multiplier for plan {}", plan.plan_id))?;

            let result = sqlx::query(
                r#"
                INSERT INTO meal_plans (plan_id, calorie_range_min, calorie_range_max,
                                        breakfast, lunch, dinner, snacks, portions_multiplier)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (plan_id) DO NOTHING
                "#,
            )
            .bind(plan.plan_id)
            .bind(plan.calorie_range_min)
            .bind(plan.calorie_range_max)
            .bind(&plan.breakfast)
            .bind(&plan.lunch)
            .bind(&plan.dinner)
            .bind(&plan.snacks)
            .bind(multiplier)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

//! Read-side data access for the analytics services
//!
//! Parameterized reads over the operational tables; all writes belong to
//! the main application. Read failures propagate as database errors and
//! are never swallowed.

use chrono::NaiveDate;
use shared::models::HealthRecord;
use sqlx::PgPool;

use crate::error::AppResult;

/// Current environmental conditions recorded for a crop
#[derive(Debug, Clone, serde::Serialize)]
pub struct CropConditions {
    pub crop_type: String,
    pub rainfall_mm: f64,
    pub temperature_celsius: f64,
    pub soil_health_score: f64,
    pub fertilizer_kg: f64,
    pub pesticide_kg: f64,
}

/// Data store supplying historical series to the predictive models
#[derive(Clone)]
pub struct FarmDataStore {
    db: PgPool,
}

impl FarmDataStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Historical yield values for a crop, oldest first
    pub async fn yield_history(&self, farm_id: i64, crop_type: &str) -> AppResult<Vec<f64>> {
        let rows = sqlx::query_as::<_, (f64,)>(
            r#"
            SELECT quantity_kg::float8
            FROM yield_records
            WHERE farm_id = $1 AND crop_type = $2
            ORDER BY harvested_on ASC
            "#,
        )
        .bind(farm_id)
        .bind(crop_type)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|(quantity,)| quantity).collect())
    }

    /// Livestock health records for a farm within the last `window_days`
    pub async fn recent_health_records(
        &self,
        farm_id: i64,
        window_days: i32,
    ) -> AppResult<Vec<HealthRecord>> {
        let rows = sqlx::query_as::<_, (i64, String, NaiveDate)>(
            r#"
            SELECT hr.animal_id, hr.diagnosis, hr.recorded_on
            FROM health_records hr
            JOIN livestock l ON l.id = hr.animal_id
            WHERE l.farm_id = $1
              AND hr.recorded_on >= CURRENT_DATE - $2::int
            ORDER BY hr.recorded_on DESC
            "#,
        )
        .bind(farm_id)
        .bind(window_days)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(animal_id, diagnosis, recorded_on)| HealthRecord {
                animal_id,
                diagnosis,
                recorded_on,
            })
            .collect())
    }

    /// Historical market prices for a product, oldest first
    pub async fn price_history(&self, product_type: &str) -> AppResult<Vec<f64>> {
        let rows = sqlx::query_as::<_, (f64,)>(
            r#"
            SELECT price::float8
            FROM market_prices
            WHERE product_type = $1
            ORDER BY observed_on ASC
            "#,
        )
        .bind(product_type)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|(price,)| price).collect())
    }

    /// Product types a farm currently tracks for market forecasting
    pub async fn tracked_products(&self, farm_id: i64) -> AppResult<Vec<String>> {
        let rows = sqlx::query_as::<_, (String,)>(
            r#"
            SELECT DISTINCT product_type
            FROM farm_products
            WHERE farm_id = $1
            ORDER BY product_type
            "#,
        )
        .bind(farm_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|(product,)| product).collect())
    }

    /// Latest recorded environmental conditions per crop for a farm
    pub async fn crop_conditions(&self, farm_id: i64) -> AppResult<Vec<CropConditions>> {
        let rows = sqlx::query_as::<_, (String, f64, f64, f64, f64, f64)>(
            r#"
            SELECT DISTINCT ON (crop_type)
                   crop_type,
                   rainfall_mm::float8,
                   temperature_celsius::float8,
                   soil_health_score::float8,
                   fertilizer_kg::float8,
                   pesticide_kg::float8
            FROM crop_conditions
            WHERE farm_id = $1
            ORDER BY crop_type, recorded_on DESC
            "#,
        )
        .bind(farm_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(crop_type, rainfall_mm, temperature_celsius, soil_health_score, fertilizer_kg, pesticide_kg)| {
                    CropConditions {
                        crop_type,
                        rainfall_mm,
                        temperature_celsius,
                        soil_health_score,
                        fertilizer_kg,
                        pesticide_kg,
                    }
                },
            )
            .collect())
    }
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::application::ports::{DocumentStoreError, HomeDocumentStore};
use crate::domain::entities::{Home, HomeDetails};
use crate::domain::value_objects::{Bed, HomeId, PhotoKey};

const SELECT_COLUMNS: &str = r#"
    SELECT id, owner, title, location, description, peoples, room, bed,
           rooms, bathrooms, smoking, guest, pet, bills_included, contract,
           security_deposit, price, photos
    FROM homes
"#;

/// `homes` table acting as the home document collection
pub struct PostgresHomeStore {
    pool: PgPool,
}

impl PostgresHomeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HomeDocumentStore for PostgresHomeStore {
    async fn insert_one(&self, home: &Home) -> Result<(), DocumentStoreError> {
        let id = home
            .id()
            .ok_or_else(|| DocumentStoreError::Internal("home has no id".to_string()))?;
        let details = home.details();
        let photos: BTreeMap<String, String> = home
            .photos()
            .iter()
            .map(|(name, key)| (name.clone(), key.as_str().to_string()))
            .collect();

        sqlx::query(
            r#"
            INSERT INTO homes (
                id, owner, title, location, description, peoples, room, bed,
                rooms, bathrooms, smoking, guest, pet, bills_included, contract,
                security_deposit, price, photos
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(id.as_str())
        .bind(home.owner())
        .bind(&details.title)
        .bind(&details.location)
        .bind(&details.description)
        .bind(details.peoples)
        .bind(&details.room)
        .bind(details.bed.code())
        .bind(details.rooms)
        .bind(details.bathrooms)
        .bind(details.smoking)
        .bind(details.guest)
        .bind(details.pet)
        .bind(details.bills_included)
        .bind(&details.contract)
        .bind(details.security_deposit)
        .bind(details.price)
        .bind(Json(photos))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_one(&self, id: &HomeId) -> Result<Option<Home>, DocumentStoreError> {
        let row = sqlx::query_as::<_, HomeRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(HomeRow::into_domain).transpose()
    }

    async fn find_window(&self, skip: i64, limit: i64) -> Result<Vec<Home>, DocumentStoreError> {
        let rows = sqlx::query_as::<_, HomeRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(HomeRow::into_domain).collect()
    }

    async fn count(&self) -> Result<i64, DocumentStoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM homes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn update_one(
        &self,
        id: &HomeId,
        details: &HomeDetails,
    ) -> Result<u64, DocumentStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE homes SET
                title = $2, location = $3, description = $4, peoples = $5,
                room = $6, bed = $7, rooms = $8, bathrooms = $9, smoking = $10,
                guest = $11, pet = $12, bills_included = $13, contract = $14,
                security_deposit = $15, price = $16, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(&details.title)
        .bind(&details.location)
        .bind(&details.description)
        .bind(details.peoples)
        .bind(&details.room)
        .bind(details.bed.code())
        .bind(details.rooms)
        .bind(details.bathrooms)
        .bind(details.smoking)
        .bind(details.guest)
        .bind(details.pet)
        .bind(details.bills_included)
        .bind(&details.contract)
        .bind(details.security_deposit)
        .bind(details.price)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct HomeRow {
    id: String,
    owner: String,
    title: String,
    location: String,
    description: String,
    peoples: i32,
    room: String,
    bed: i16,
    rooms: i32,
    bathrooms: i32,
    smoking: bool,
    guest: bool,
    pet: bool,
    bills_included: bool,
    contract: String,
    security_deposit: i64,
    price: i64,
    photos: Json<BTreeMap<String, String>>,
}

impl HomeRow {
    fn into_domain(self) -> Result<Home, DocumentStoreError> {
        let corrupt = |reason: String| DocumentStoreError::CorruptDocument {
            id: self.id.clone(),
            reason,
        };

        let bed = Bed::from_code(self.bed).map_err(|e| corrupt(e.to_string()))?;
        let photos = self
            .photos
            .0
            .iter()
            .map(|(name, key)| {
                key.parse::<PhotoKey>()
                    .map(|key| (name.clone(), key))
                    .map_err(|e| corrupt(e.to_string()))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        let id = HomeId::new(self.id.clone()).map_err(|e| corrupt(e.to_string()))?;

        Ok(Home::reconstruct(
            id,
            self.owner,
            HomeDetails {
                title: self.title,
                location: self.location,
                description: self.description,
                peoples: self.peoples,
                room: self.room,
                bed,
                rooms: self.rooms,
                bathrooms: self.bathrooms,
                smoking: self.smoking,
                guest: self.guest,
                pet: self.pet,
                bills_included: self.bills_included,
                contract: self.contract,
                security_deposit: self.security_deposit,
                price: self.price,
            },
            photos,
        ))
    }
}

use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, Executor, Pool, Row, Sqlite};
use uuid::Uuid;

use crate::{
    api::PlaceStore,
    entities::{NewPlace, Place},
    error::{persistence_read_error, persistence_write_error, Error},
};

type Database = Sqlite;

#[derive(Debug, Clone)]
pub struct SqlitePlaceStore {
    pool: Pool<Database>,
}

impl SqlitePlaceStore {
    #[tracing::instrument(name = "SqlitePlaceStore::new")]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Self::with_pool(pool).await
    }

    /// A private database that lives as long as the store. Everything goes
    /// through one connection, since each in-memory connection is its own
    /// database.
    pub async fn in_memory() -> Result<Self, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: Pool<Database>) -> Result<Self, Error> {
        pool.execute(
            "CREATE TABLE IF NOT EXISTS places (id BLOB PRIMARY KEY, title TEXT NOT NULL, subtitle TEXT NOT NULL, latitude REAL NOT NULL, longitude REAL NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PlaceStore for SqlitePlaceStore {
    #[tracing::instrument(skip(self))]
    async fn insert(&self, place: NewPlace) -> Result<Uuid, Error> {
        let id = Uuid::new_v4();

        let mut tx = self.pool.begin().await.map_err(persistence_write_error)?;

        tx.execute(
            sqlx::query(
                "INSERT INTO places (id, title, subtitle, latitude, longitude) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(&place.title)
            .bind(&place.subtitle)
            .bind(place.latitude)
            .bind(place.longitude),
        )
        .await
        .map_err(persistence_write_error)?;

        tx.commit().await.map_err(persistence_write_error)?;

        tracing::info!(%id, "place saved");

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Place>, Error> {
        let mut conn = self.pool.acquire().await.map_err(persistence_read_error)?;

        // `id` is the primary key, so at most one row can come back; the
        // first one wins regardless.
        let maybe_row = conn
            .fetch_optional(
                sqlx::query(
                    "SELECT id, title, subtitle, latitude, longitude FROM places WHERE id = ? LIMIT 1",
                )
                .bind(&id),
            )
            .await
            .map_err(persistence_read_error)?;

        let row = match maybe_row {
            Some(row) => row,
            None => return Ok(None),
        };

        let place = Place {
            id: row.try_get("id").map_err(persistence_read_error)?,
            title: row.try_get("title").map_err(persistence_read_error)?,
            subtitle: row.try_get("subtitle").map_err(persistence_read_error)?,
            latitude: row.try_get("latitude").map_err(persistence_read_error)?,
            longitude: row.try_get("longitude").map_err(persistence_read_error)?,
        };

        Ok(Some(place))
    }
}

#[tokio::test]
async fn insert_then_fetch_returns_same_fields() {
    use crate::entities::Coordinate;

    let store = SqlitePlaceStore::in_memory().await.unwrap();

    let new_place = NewPlace::new(
        "Home".into(),
        "blue door".into(),
        Coordinate::new(52.5, 13.4),
    );
    let id = store.insert(new_place.clone()).await.unwrap();

    let place = store.fetch_by_id(id).await.unwrap().unwrap();
    assert_eq!(place, new_place.into_place(id));
}

#[tokio::test]
async fn fetch_unknown_id_is_none() {
    let store = SqlitePlaceStore::in_memory().await.unwrap();

    let result = store.fetch_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn identical_inserts_get_distinct_ids() {
    use crate::entities::Coordinate;

    let store = SqlitePlaceStore::in_memory().await.unwrap();
    let new_place = NewPlace::new("Cafe".into(), "".into(), Coordinate::new(48.85, 2.35));

    let first = store.insert(new_place.clone()).await.unwrap();
    let second = store.insert(new_place).await.unwrap();

    assert_ne!(first, second);
    assert!(store.fetch_by_id(first).await.unwrap().is_some());
    assert!(store.fetch_by_id(second).await.unwrap().is_some());
}

#[tokio::test]
async fn empty_title_and_comment_are_stored() {
    use crate::entities::Coordinate;

    let store = SqlitePlaceStore::in_memory().await.unwrap();
    let id = store
        .insert(NewPlace::new("".into(), "".into(), Coordinate::new(-33.86, 151.21)))
        .await
        .unwrap();

    let place = store.fetch_by_id(id).await.unwrap().unwrap();
    assert_eq!(place.title, "");
    assert_eq!(place.subtitle, "");
    assert_eq!(place.latitude, -33.86);
}

#[test]
fn write_to_closed_pool_is_a_write_error() {
    use crate::entities::Coordinate;
    use tokio_test::block_on;

    let err = block_on(async {
        let store = SqlitePlaceStore::in_memory().await.unwrap();
        store.pool.close().await;

        store
            .insert(NewPlace::new(
                "Home".into(),
                "".into(),
                Coordinate::new(0.0, 0.0),
            ))
            .await
            .unwrap_err()
    });

    assert!(err.is_persistence_write());
}

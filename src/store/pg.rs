use super::SeedStore;
use crate::{
    connect_to_db,
    models::{Club, Event, Membership, NewClub, NewEvent, NewMembership},
    schema::*,
    DbConnection, DbPool,
};
use anyhow::Context;
use diesel::{connection::SimpleConnection, Connection, PgConnection};
use diesel_async::RunQueryDsl;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub(crate) const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

// Drops every table the migrations create, plus diesel's bookkeeping table so
// the migrations run again from scratch.
pub(crate) const DROP_SQL: &str = concat!(
    include_str!("../../migrations/2022-11-20-000000_create_seed_tables/down.sql"),
    "DROP TABLE IF EXISTS __diesel_schema_migrations;\n",
);

/// A postgres database reached through a connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    db_url: String,
}

impl PgStore {
    pub fn connect(db_url: &str, max_size: usize) -> anyhow::Result<Self> {
        Ok(Self {
            pool: connect_to_db(db_url, max_size)?,
            db_url: db_url.to_string(),
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn conn(&self) -> anyhow::Result<DbConnection> {
        self.pool
            .get()
            .await
            .context("failed to connect to database")
    }
}

/// Drops the tables and reruns the embedded migrations, all in one
/// transaction. Migrations need a blocking connection.
fn recreate_schema(db_url: &str) -> anyhow::Result<()> {
    let mut conn = PgConnection::establish(db_url).context("failed to connect to database")?;

    conn.transaction(|conn| {
        conn.batch_execute(DROP_SQL)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;
        Ok(())
    })
}

impl SeedStore for PgStore {
    async fn reset(&mut self) -> anyhow::Result<()> {
        let db_url = self.db_url.clone();
        tokio::task::spawn_blocking(move || recreate_schema(&db_url)).await?
    }

    async fn create_club(&mut self, club: NewClub) -> anyhow::Result<Club> {
        let conn = &mut self.conn().await?;

        Ok(diesel::insert_into(clubs::table)
            .values(club)
            .get_result::<Club>(conn)
            .await?)
    }

    async fn create_event(&mut self, event: NewEvent) -> anyhow::Result<Event> {
        let conn = &mut self.conn().await?;

        Ok(diesel::insert_into(events::table)
            .values(event)
            .get_result::<Event>(conn)
            .await?)
    }

    async fn create_membership(
        &mut self,
        membership: NewMembership,
    ) -> anyhow::Result<Membership> {
        let conn = &mut self.conn().await?;

        Ok(diesel::insert_into(memberships::table)
            .values(membership)
            .get_result::<Membership>(conn)
            .await?)
    }
}

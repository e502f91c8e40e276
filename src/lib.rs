use anyhow::{bail, Context};
use deadpool::managed::{Object, Pool};
use diesel_async::{pooled_connection::AsyncDieselConnectionManager, AsyncPgConnection};

pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

pub type DbPool = Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;
pub type DbConnection = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// Builds the pool. No connection is opened until the first checkout.
pub fn connect_to_db(db_url: &str, max_size: usize) -> anyhow::Result<DbPool> {
    // a pool without slots never hands out a connection, and checkouts have no timeout
    if max_size == 0 {
        bail!("database pool size must be at least 1");
    }

    let db_config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
    Pool::builder(db_config)
        .max_size(max_size)
        .build()
        .context("failed to build database pool")
}

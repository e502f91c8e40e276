use crate::models::{Club, Event, Membership, NewClub, NewEvent, NewMembership};

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Storage the seeder writes to.
///
/// Every call either completes or fails as a whole; the seeder never issues a
/// call before the previous one has returned.
#[allow(async_fn_in_trait)]
pub trait SeedStore {
    /// Drops and recreates every table, discarding all rows.
    async fn reset(&mut self) -> anyhow::Result<()>;

    async fn create_club(&mut self, club: NewClub) -> anyhow::Result<Club>;

    async fn create_event(&mut self, event: NewEvent) -> anyhow::Result<Event>;

    async fn create_membership(&mut self, membership: NewMembership)
        -> anyhow::Result<Membership>;
}

use super::SeedStore;
use crate::{
    error::SeedStep,
    models::{Club, Event, Membership, NewClub, NewEvent, NewMembership},
};
use anyhow::bail;
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    Unreachable,
    FailOn(SeedStep),
}

/// Tables held in memory, with serial ids and foreign key checks.
///
/// Faults can be injected to make a given operation fail, or to make the
/// store behave as if the database could not be reached.
#[derive(Debug, Default)]
pub struct MemoryStore {
    clubs: Vec<Club>,
    events: Vec<Event>,
    memberships: Vec<Membership>,
    next_club_id: i32,
    next_event_id: i32,
    next_membership_id: i32,
    fault: Option<Fault>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every call.
    pub fn unreachable() -> Self {
        Self {
            fault: Some(Fault::Unreachable),
            ..Self::default()
        }
    }

    /// Makes every call belonging to `step` fail.
    pub fn fail_on(mut self, step: SeedStep) -> Self {
        self.fault = Some(Fault::FailOn(step));
        self
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty() && self.events.is_empty() && self.memberships.is_empty()
    }

    fn check(&self, step: SeedStep) -> anyhow::Result<()> {
        match self.fault {
            Some(Fault::Unreachable) => bail!("connection refused"),
            Some(Fault::FailOn(s)) if s == step => bail!("injected failure"),
            _ => Ok(()),
        }
    }

    fn check_club(&self, table: &str, club_id: i32) -> anyhow::Result<()> {
        if !self.clubs.iter().any(|c| c.id == club_id) {
            bail!(
                "insert on table \"{table}\" violates foreign key constraint: \
                 club {club_id} does not exist"
            );
        }
        Ok(())
    }
}

fn next(id: &mut i32) -> i32 {
    *id += 1;
    *id
}

impl SeedStore for MemoryStore {
    async fn reset(&mut self) -> anyhow::Result<()> {
        self.check(SeedStep::Reset)?;

        let fault = self.fault;
        *self = Self {
            fault,
            ..Self::default()
        };
        Ok(())
    }

    async fn create_club(&mut self, club: NewClub) -> anyhow::Result<Club> {
        self.check(SeedStep::CreateClub)?;

        let now = Utc::now();
        let club = Club {
            id: next(&mut self.next_club_id),
            name: club.name,
            description: club.description,
            owner_id: club.owner_id,
            logo: club.logo,
            created_at: now,
            updated_at: now,
        };
        self.clubs.push(club.clone());
        Ok(club)
    }

    async fn create_event(&mut self, event: NewEvent) -> anyhow::Result<Event> {
        self.check(SeedStep::CreateEvent)?;
        self.check_club("events", event.club_id)?;

        let now = Utc::now();
        let event = Event {
            id: next(&mut self.next_event_id),
            club_id: event.club_id,
            title: event.title,
            description: event.description,
            datetime: event.datetime,
            created_at: now,
            updated_at: now,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    async fn create_membership(
        &mut self,
        membership: NewMembership,
    ) -> anyhow::Result<Membership> {
        self.check(SeedStep::CreateMembership)?;
        self.check_club("memberships", membership.club_id)?;

        let now = Utc::now();
        let membership = Membership {
            id: next(&mut self.next_membership_id),
            user_id: membership.user_id,
            club_id: membership.club_id,
            created_at: now,
            updated_at: now,
        };
        self.memberships.push(membership.clone());
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club() -> NewClub {
        NewClub::new("Chess Club", "Weekly games", "user-9")
    }

    #[test_log::test(tokio::test)]
    async fn ids_are_serial_per_table() {
        let mut store = MemoryStore::new();
        let a = store.create_club(club()).await.unwrap();
        let b = store.create_club(club()).await.unwrap();
        let m = store
            .create_membership(NewMembership::new("user-9", &a))
            .await
            .unwrap();

        assert_eq!((a.id, b.id, m.id), (1, 2, 1));
    }

    #[test_log::test(tokio::test)]
    async fn rejects_dangling_club_reference() {
        let mut store = MemoryStore::new();
        let err = store
            .create_membership(NewMembership {
                user_id: "user-1".to_string(),
                club_id: 42,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("foreign key"));
        assert!(store.memberships().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn reset_restarts_ids() {
        let mut store = MemoryStore::new();
        store.create_club(club()).await.unwrap();
        store.create_club(club()).await.unwrap();

        store.reset().await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.create_club(club()).await.unwrap().id, 1);
    }

    #[test_log::test(tokio::test)]
    async fn injected_fault_survives_reset() {
        let mut store = MemoryStore::new().fail_on(SeedStep::CreateClub);
        store.reset().await.unwrap();

        assert!(store.create_club(club()).await.is_err());
        assert!(store.clubs().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn unreachable_refuses_everything() {
        let mut store = MemoryStore::unreachable();

        assert_eq!(
            store.reset().await.unwrap_err().to_string(),
            "connection refused"
        );
        assert!(store.create_club(club()).await.is_err());
        assert!(store.is_empty());
    }
}

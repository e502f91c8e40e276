use crate::{
    error::{SeedResult, SeedStep, StepContext},
    models::{Club, Event, Membership, NewClub, NewEvent, NewMembership},
    store::SeedStore,
};
use chrono::{DateTime, Duration, Utc};

/// Everything created by a successful run, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub clubs: Vec<Club>,
    pub events: Vec<Event>,
    pub memberships: Vec<Membership>,
}

/// Process exit status for a finished run: 0 on success, 1 on any failure.
pub fn exit_status(result: &SeedResult<SeedReport>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Resets `store` and fills it with the sample clubs, events and membership.
///
/// This drops every existing row. Any failure stops the run where it is;
/// nothing already written is undone.
pub async fn run<S: SeedStore>(store: &mut S) -> SeedResult<SeedReport> {
    run_at(store, Utc::now()).await
}

/// Same as [`run`], with event dates computed from `now`.
#[tracing::instrument(skip(store))]
pub async fn run_at<S: SeedStore>(store: &mut S, now: DateTime<Utc>) -> SeedResult<SeedReport> {
    store.reset().await.step(SeedStep::Reset)?;
    tracing::info!("DB synced (force true)");

    let algo = store
        .create_club(NewClub::new(
            "Coding & Algorithms Club",
            "Practice algorithms and host coding sessions",
            "user-1",
        ))
        .await
        .step(SeedStep::CreateClub)?;
    tracing::debug!(id = algo.id, name = %algo.name, "created club");

    let robotics = store
        .create_club(NewClub::new(
            "Robotics Club",
            "Hands-on robotics workshops",
            "user-2",
        ))
        .await
        .step(SeedStep::CreateClub)?;
    tracing::debug!(id = robotics.id, name = %robotics.name, "created club");

    let practice = store
        .create_event(NewEvent::new(
            &algo,
            "Weekly Algo Practice",
            "Practice DSA",
            now + Duration::days(3),
        ))
        .await
        .step(SeedStep::CreateEvent)?;
    tracing::debug!(
        id = practice.id,
        club_id = practice.club_id,
        title = %practice.title,
        "created event"
    );

    let workshop = store
        .create_event(NewEvent::new(
            &robotics,
            "Robotics Workshop",
            "Intro to microcontrollers",
            now + Duration::days(7),
        ))
        .await
        .step(SeedStep::CreateEvent)?;
    tracing::debug!(
        id = workshop.id,
        club_id = workshop.club_id,
        title = %workshop.title,
        "created event"
    );

    let membership = store
        .create_membership(NewMembership::new("user-1", &algo))
        .await
        .step(SeedStep::CreateMembership)?;
    tracing::debug!(
        id = membership.id,
        club_id = membership.club_id,
        user_id = %membership.user_id,
        "created membership"
    );

    tracing::info!("Seed completed");

    Ok(SeedReport {
        clubs: vec![algo, robotics],
        events: vec![practice, workshop],
        memberships: vec![membership],
    })
}

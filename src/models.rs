use crate::schema::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable)]
#[diesel(table_name = clubs)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub logo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Associations)]
#[diesel(belongs_to(Club))]
#[diesel(table_name = events)]
pub struct Event {
    pub id: i32,
    pub club_id: i32,
    pub title: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Associations)]
#[diesel(belongs_to(Club))]
#[diesel(table_name = memberships)]
pub struct Membership {
    pub id: i32,
    pub user_id: String,
    pub club_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = clubs)]
pub struct NewClub {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub logo: String,
}

impl NewClub {
    /// A club with no logo.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            owner_id: owner_id.into(),
            logo: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub club_id: i32,
    pub title: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
}

impl NewEvent {
    pub fn new(
        club: &Club,
        title: impl Into<String>,
        description: impl Into<String>,
        datetime: DateTime<Utc>,
    ) -> Self {
        Self {
            club_id: club.id,
            title: title.into(),
            description: description.into(),
            datetime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = memberships)]
pub struct NewMembership {
    pub user_id: String,
    pub club_id: i32,
}

impl NewMembership {
    pub fn new(user_id: impl Into<String>, club: &Club) -> Self {
        Self {
            user_id: user_id.into(),
            club_id: club.id,
        }
    }
}

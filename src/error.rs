use thiserror::Error;
use crate::model::entity::{Person, Room};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PreferenceError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("person {owner} branches on person {person} twice along one path")]
    DuplicateBranch { owner: Person, person: Person },
    #[error("inconsistent room count for {scope}: expected {expected}, found {found}")]
    InconsistentRoomCount { scope: RoomCountScope, expected: usize, found: usize },
    #[error("person {owner} has an invalid price for room {room}: {value}")]
    InvalidPrice { owner: Person, room: Room, value: String },
    #[error("person {owner} branches on invalid person index {index}")]
    InvalidPersonIndex { owner: Person, index: String },
    #[error("{num_people} people cannot fill {num_rooms} rooms")]
    InsufficientPeople { num_people: usize, num_rooms: usize },
    #[error("preferences describe no rooms")]
    NoRooms,
}

/// Where two room counts disagreed: inside one person's tree or between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCountScope {
    Tree(Person),
    Forest(Person),
}

impl std::fmt::Display for RoomCountScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomCountScope::Tree(owner) => write!(f, "leaves of person {owner}"),
            RoomCountScope::Forest(owner) => write!(f, "person {owner} against earlier people"),
        }
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(err: serde_json::Error) -> Self {
        PreferenceError::MalformedInput(err.to_string())
    }
}

//! Finds every way to choose housemates from a group and place them in rooms
//! so that what they are willing to pay adds up to the rent.
//!
//! Each person's willingness to pay is a binary decision tree over who else
//! moves in, ending in one price per room.

pub mod cli;
pub mod error;
pub mod model;
pub mod parse;
pub mod price;
pub mod report;
pub mod search;
pub mod validate;

pub use error::PreferenceError;
pub use model::assignment::{Cover, HousemateSet, RoomSlot};
pub use model::preference::{PreferenceNode, Preferences};
pub use search::{assignment_count, find_all_covers, CoverSearch};

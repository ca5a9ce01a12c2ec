use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::{PreferenceError, RoomCountScope};
use crate::model::entity::Person;
use crate::model::preference::{PreferenceNode, Preferences};

impl Preferences {
    /// Checks every tree in the forest and returns the number of rooms they agree on.
    pub fn validate(&self) -> Result<usize, PreferenceError> {
        let num_people = self.num_people();
        let mut num_rooms: Option<usize> = None;
        for (owner, tree) in self.iter() {
            let rooms = validate_node(tree, owner, num_people, &BTreeSet::new())?;
            debug!(owner, rooms, "validated preference tree");
            match num_rooms {
                Some(expected) if expected != rooms => {
                    return Err(PreferenceError::InconsistentRoomCount {
                        scope: RoomCountScope::Forest(owner),
                        expected,
                        found: rooms,
                    });
                }
                _ => num_rooms = Some(rooms),
            }
        }
        let num_rooms = match num_rooms {
            Some(0) | None => return Err(PreferenceError::NoRooms),
            Some(rooms) => rooms,
        };
        if num_people < num_rooms {
            return Err(PreferenceError::InsufficientPeople { num_people, num_rooms });
        }
        info!(num_people, num_rooms, "preferences validated");
        Ok(num_rooms)
    }
}

// `seen` holds the people already branched on between the root and `node`.
fn validate_node(
    node: &PreferenceNode,
    owner: Person,
    num_people: usize,
    seen: &BTreeSet<Person>,
) -> Result<usize, PreferenceError> {
    match node {
        PreferenceNode::PriceList(prices) => {
            if let Some((room, price)) = prices.iter().enumerate().find(|(_, p)| !(p.is_finite() && **p >= 0.0)) {
                return Err(PreferenceError::InvalidPrice { owner, room, value: price.to_string() });
            }
            Ok(prices.len())
        }
        PreferenceNode::Decision { person, when_present, when_absent } => {
            if seen.contains(person) {
                return Err(PreferenceError::DuplicateBranch { owner, person: *person });
            }
            if *person >= num_people {
                return Err(PreferenceError::InvalidPersonIndex { owner, index: person.to_string() });
            }
            let mut path = seen.clone();
            path.insert(*person);
            let present = validate_node(when_present, owner, num_people, &path)?;
            let absent = validate_node(when_absent, owner, num_people, &path)?;
            if present != absent {
                return Err(PreferenceError::InconsistentRoomCount {
                    scope: RoomCountScope::Tree(owner),
                    expected: present,
                    found: absent,
                });
            }
            Ok(present)
        }
    }
}

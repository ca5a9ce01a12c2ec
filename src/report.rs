use std::fmt;

use itertools::Itertools;

use crate::model::assignment::Cover;

pub const COVER_HEADER: &str = "Found a cover:";

/// One line per room: `  room <r>: housemate <p> for $<price>;`.
pub fn display(cover: &Cover) -> String {
    cover.slots.iter()
        .enumerate()
        .map(|(room, slot)| format!("  room {}: housemate {} for ${};", room, slot.person, slot.price))
        .join("\n")
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display(self))
    }
}

use std::ops::Range;
use std::vec;

use itertools::{Combinations, Itertools, Permutations};
use tracing::{debug, trace};

use crate::model::assignment::{Cover, HousemateSet, RoomSlot};
use crate::model::entity::{Person, Price};
use crate::model::preference::Preferences;

/// Lazily enumerates every room assignment whose prices reach `rent`.
///
/// Housemate sets come in lexicographic order, and within each set the room
/// orderings come in lexicographic order of positions, so two runs over the
/// same input yield the same sequence.
pub fn find_all_covers(rent: Price, preferences: &Preferences, num_rooms: usize) -> CoverSearch<'_> {
    CoverSearch::new(rent, preferences, num_rooms)
}

/// `C(num_people, num_rooms) * num_rooms!`, the number of assignments a full search evaluates.
pub fn assignment_count(num_people: usize, num_rooms: usize) -> u128 {
    if num_rooms > num_people {
        return 0;
    }
    // n! / (n - k)!
    (num_people - num_rooms + 1..=num_people)
        .map(|n| n as u128)
        .fold(1u128, |acc, n| acc.saturating_mul(n))
}

pub struct CoverSearch<'a> {
    preferences: &'a Preferences,
    rent: Price,
    num_rooms: usize,
    combinations: Combinations<Range<Person>>,
    current: Option<(HousemateSet, Permutations<vec::IntoIter<Person>>)>,
    evaluated: u128,
}

impl<'a> CoverSearch<'a> {
    /// `num_rooms` must be the count returned by `Preferences::validate`.
    pub fn new(rent: Price, preferences: &'a Preferences, num_rooms: usize) -> CoverSearch<'a> {
        CoverSearch {
            preferences,
            rent,
            num_rooms,
            combinations: (0..preferences.num_people()).combinations(num_rooms),
            current: None,
            evaluated: 0,
        }
    }

    /// Number of (housemate set, room ordering) pairs priced so far.
    pub fn evaluated(&self) -> u128 {
        self.evaluated
    }

    fn assess(&self, housemates: &HousemateSet, order: Vec<Person>) -> Option<Cover> {
        let slots = order.into_iter()
            .enumerate()
            .map(|(room, person)| RoomSlot {
                person,
                price: self.preferences.0[person].resolve_price(housemates, room),
            })
            .collect_vec();
        let total: Price = slots.iter().map(|slot| slot.price).sum();
        (total >= self.rent).then(|| Cover { housemates: housemates.clone(), slots, total })
    }
}

impl<'a> Iterator for CoverSearch<'a> {
    type Item = Cover;

    fn next(&mut self) -> Option<Cover> {
        loop {
            if let Some((housemates, mut orders)) = self.current.take() {
                while let Some(order) = orders.next() {
                    self.evaluated += 1;
                    if let Some(cover) = self.assess(&housemates, order) {
                        trace!(people = ?cover.people(), total = cover.total, "found cover");
                        self.current = Some((housemates, orders));
                        return Some(cover);
                    }
                }
            }
            let choice = self.combinations.next()?;
            debug!(housemates = ?choice, "searching room orderings");
            let housemates: HousemateSet = choice.iter().copied().collect();
            self.current = Some((housemates, choice.into_iter().permutations(self.num_rooms)));
        }
    }
}

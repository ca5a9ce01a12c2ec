use crate::model::assignment::HousemateSet;
use crate::model::entity::{Price, Room};
use crate::model::preference::PreferenceNode;

impl PreferenceNode {
    /// Walks the tree down to the leaf selected by `housemates` and reads off the price of `room`.
    ///
    /// Panics if `room` is outside the leaf; validated trees searched with their own room count never are.
    pub fn resolve_price(&self, housemates: &HousemateSet, room: Room) -> Price {
        let mut node = self;
        loop {
            match node {
                PreferenceNode::PriceList(prices) => return prices[room],
                PreferenceNode::Decision { person, when_present, when_absent } => {
                    node = if housemates.contains(*person) { when_present.as_ref() } else { when_absent.as_ref() };
                }
            }
        }
    }
}

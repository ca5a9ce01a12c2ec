pub mod entity {
    pub type Person = usize;
    pub type Room = usize;
    pub type Price = f64;
}


pub mod preference {
    use serde::Serialize;
    use super::entity::{Person, Price};

    /// One node of a person's decision tree.
    ///
    /// A `Decision` branches on whether `person` ends up among the housemates;
    /// a `PriceList` holds one price per room for the situation that led to it.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(untagged)]
    pub enum PreferenceNode {
        PriceList(Vec<Price>),
        Decision {
            person: Person,
            #[serde(rename = "in")]
            when_present: Box<PreferenceNode>,
            #[serde(rename = "out")]
            when_absent: Box<PreferenceNode>,
        },
    }

    impl PreferenceNode {
        pub fn prices(prices: impl Into<Vec<Price>>) -> PreferenceNode {
            PreferenceNode::PriceList(prices.into())
        }

        pub fn decision(person: Person, when_present: PreferenceNode, when_absent: PreferenceNode) -> PreferenceNode {
            PreferenceNode::Decision {
                person,
                when_present: Box::new(when_present),
                when_absent: Box::new(when_absent),
            }
        }
    }

    /// Root of every person's tree, indexed by person.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(transparent)]
    pub struct Preferences(pub Vec<PreferenceNode>);

    impl Preferences {
        pub fn num_people(&self) -> usize {
            self.0.len()
        }

        pub fn of(&self, person: Person) -> Option<&PreferenceNode> {
            self.0.get(person)
        }

        pub fn iter(&self) -> impl Iterator<Item = (Person, &PreferenceNode)> {
            self.0.iter().enumerate()
        }
    }

    impl From<Vec<PreferenceNode>> for Preferences {
        fn from(trees: Vec<PreferenceNode>) -> Self {
            Preferences(trees)
        }
    }
}


pub mod assignment {
    use std::collections::BTreeSet;
    use super::entity::{Person, Price};

    /// The people chosen to fill the rooms, without regard to who gets which room.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct HousemateSet(BTreeSet<Person>);

    impl HousemateSet {
        pub fn contains(&self, person: Person) -> bool {
            self.0.contains(&person)
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        pub fn iter(&self) -> impl Iterator<Item = Person> + '_ {
            self.0.iter().copied()
        }
    }

    impl FromIterator<Person> for HousemateSet {
        fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
            HousemateSet(iter.into_iter().collect())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct RoomSlot {
        pub person: Person,
        pub price: Price,
    }

    /// A room assignment whose resolved prices reach the rent.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Cover {
        pub housemates: HousemateSet,
        /// Indexed by room.
        pub slots: Vec<RoomSlot>,
        pub total: Price,
    }

    impl Cover {
        pub fn prices(&self) -> Vec<Price> {
            self.slots.iter().map(|slot| slot.price).collect()
        }

        pub fn people(&self) -> Vec<Person> {
            self.slots.iter().map(|slot| slot.person).collect()
        }
    }
}

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PreferenceError;
use crate::model::entity::{Person, Price};
use crate::model::preference::{PreferenceNode, Preferences};

impl Preferences {
    /// Decodes the JSON document shape: a list with one tree per person, where a
    /// tree is either an array of prices or an object with `person`, `in` and `out`.
    ///
    /// Only shape and types are checked here; `validate` checks the rest.
    pub fn from_json(input: &str) -> Result<Preferences, PreferenceError> {
        let mut de = serde_json::Deserializer::from_str(input);
        // Trees may nest as deep as there are people.
        de.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Preferences::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Preferences, PreferenceError> {
        let trees = value.as_array().ok_or_else(|| {
            PreferenceError::MalformedInput(format!("expected a list of preferences, found {}", kind(value)))
        })?;
        trees.iter()
            .enumerate()
            .map(|(owner, tree)| parse_node(owner, tree))
            .collect::<Result<Vec<_>, _>>()
            .map(Preferences)
    }
}

fn parse_node(owner: Person, value: &Value) -> Result<PreferenceNode, PreferenceError> {
    match value {
        Value::Array(prices) => prices.iter()
            .enumerate()
            .map(|(room, price)| parse_price(owner, room, price))
            .collect::<Result<Vec<_>, _>>()
            .map(PreferenceNode::PriceList),
        Value::Object(fields) => {
            let person = parse_person(owner, field(owner, fields, "person")?)?;
            let when_present = parse_node(owner, field(owner, fields, "in")?)?;
            let when_absent = parse_node(owner, field(owner, fields, "out")?)?;
            Ok(PreferenceNode::decision(person, when_present, when_absent))
        }
        other => Err(PreferenceError::MalformedInput(format!(
            "preference of person {owner} must be a price list or a decision object, found {}",
            kind(other)
        ))),
    }
}

fn field<'a>(owner: Person, fields: &'a Map<String, Value>, key: &str) -> Result<&'a Value, PreferenceError> {
    fields.get(key).ok_or_else(|| {
        PreferenceError::MalformedInput(format!("decision in preferences of person {owner} is missing \"{key}\""))
    })
}

fn parse_price(owner: Person, room: usize, value: &Value) -> Result<Price, PreferenceError> {
    value.as_f64().ok_or_else(|| PreferenceError::InvalidPrice {
        owner,
        room,
        value: value.to_string(),
    })
}

fn parse_person(owner: Person, value: &Value) -> Result<Person, PreferenceError> {
    value.as_u64()
        .and_then(|index| Person::try_from(index).ok())
        .ok_or_else(|| PreferenceError::InvalidPersonIndex { owner, index: value.to_string() })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

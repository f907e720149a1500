//! Built-in dataset of professions and their skills.

use log::info;

use crate::components::skill_graph::{GraphError, Person};

const PEOPLE: &str = include_str!("people.json");

/// Parses the embedded dataset.
pub fn load() -> Result<Vec<Person>, GraphError> {
	parse(PEOPLE)
}

pub fn parse(json: &str) -> Result<Vec<Person>, GraphError> {
	let people: Vec<Person> = serde_json::from_str(json)?;
	info!("loaded {} people", people.len());
	Ok(people)
}

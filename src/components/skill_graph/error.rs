use thiserror::Error;

/// Reasons a dataset is rejected before layout.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
	#[error("malformed dataset: {0}")]
	Parse(String),

	#[error("person #{index} has an empty name")]
	EmptyName { index: usize },

	#[error("person `{0}` appears more than once")]
	DuplicatePerson(String),

	#[error("person `{person}` lists an empty skill")]
	EmptySkill { person: String },

	#[error("skill `{skill}` of `{person}` is not on the skill ring")]
	UnknownSkill { person: String, skill: String },
}

impl From<serde_json::Error> for GraphError {
	fn from(err: serde_json::Error) -> Self {
		GraphError::Parse(err.to_string())
	}
}

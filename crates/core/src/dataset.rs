//! Loading and validation of the people that the picker offers.
//!
//! A dataset is read once at startup and shared read-only afterwards. The
//! build bundles a default list so the picker works without any input file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::person::{Person, PersonId};

const BUNDLED_PEOPLE: &str = include_str!("../data/people.json");

#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read dataset {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse dataset: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("person at index {index} has an empty id")]
	EmptyId { index: usize },
	#[error("person `{id}` has an empty name")]
	EmptyName { id: PersonId },
	#[error("duplicate person id `{id}`")]
	DuplicateId { id: PersonId },
}

/// Accepts `{ "data": [...] }` as well as a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetDocument {
	Wrapped { data: Vec<Person> },
	Bare(Vec<Person>),
}

/// Immutable, ordered list of people.
#[derive(Debug, Clone)]
pub struct Dataset {
	people: Arc<[Person]>,
}

impl Dataset {
	/// Validate and wrap the provided people, keeping their order.
	pub fn new(people: Vec<Person>) -> Result<Self, DatasetError> {
		let mut seen = HashSet::with_capacity(people.len());
		for (index, person) in people.iter().enumerate() {
			if person.id.as_str().trim().is_empty() {
				return Err(DatasetError::EmptyId { index });
			}
			if person.name.trim().is_empty() {
				return Err(DatasetError::EmptyName {
					id: person.id.clone(),
				});
			}
			if !seen.insert(person.id.clone()) {
				return Err(DatasetError::DuplicateId {
					id: person.id.clone(),
				});
			}
		}

		Ok(Self {
			people: people.into(),
		})
	}

	/// The list compiled into the binary.
	pub fn bundled() -> Result<Self, DatasetError> {
		Self::from_json_str(BUNDLED_PEOPLE)
	}

	pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
		let people = match serde_json::from_str(json)? {
			DatasetDocument::Wrapped { data } => data,
			DatasetDocument::Bare(people) => people,
		};
		let dataset = Self::new(people)?;
		tracing::debug!(people = dataset.len(), "dataset loaded");
		Ok(dataset)
	}

	pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
		let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&contents)
	}

	#[must_use]
	pub fn people(&self) -> &[Person] {
		&self.people
	}

	#[must_use]
	pub fn shared(&self) -> Arc<[Person]> {
		Arc::clone(&self.people)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.people.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.people.is_empty()
	}
}

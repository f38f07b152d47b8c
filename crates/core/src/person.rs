use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a [`Person`] within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PersonId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for PersonId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for PersonId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for PersonId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// A pickable entry. Records are read once from the dataset and only ever
/// referenced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
	pub id: PersonId,
	pub name: String,
	#[serde(default)]
	pub email: String,
	#[serde(default, alias = "avatarUrl")]
	pub avatar: String,
}

impl Person {
	pub fn new(
		id: impl Into<PersonId>,
		name: impl Into<String>,
		email: impl Into<String>,
		avatar: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			email: email.into(),
			avatar: avatar.into(),
		}
	}

	/// Case-insensitive substring match against the name only.
	///
	/// `needle` must already be lowercased.
	#[must_use]
	pub fn name_contains_lowercase(&self, needle: &str) -> bool {
		needle.is_empty() || self.name.to_lowercase().contains(needle)
	}
}

impl fmt::Display for Person {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.email.is_empty() {
			f.write_str(&self.name)
		} else {
			write!(f, "{} <{}>", self.name, self.email)
		}
	}
}

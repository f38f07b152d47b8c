//! Lookup of bundled themes by name or alias.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtins;
use super::types::{Theme, ThemeDescriptor};

/// Normalized name or alias to the position in [`builtins::descriptors`].
fn index() -> &'static HashMap<String, usize> {
	static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
	INDEX.get_or_init(|| {
		let mut index = HashMap::new();
		for (position, descriptor) in builtins::descriptors().iter().enumerate() {
			index.insert(normalize(&descriptor.name), position);
		}
		// Canonical names win over aliases.
		for (position, descriptor) in builtins::descriptors().iter().enumerate() {
			for alias in &descriptor.aliases {
				index.entry(normalize(alias)).or_insert(position);
			}
		}
		index
	})
}

fn normalize(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

/// Look up a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let position = *index().get(&normalize(name))?;
	builtins::descriptors()
		.get(position)
		.map(|descriptor| descriptor.theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	descriptors()
		.iter()
		.map(|descriptor| descriptor.name.clone())
		.collect()
}

/// Every bundled theme with its aliases, sorted by name.
#[must_use]
pub fn descriptors() -> &'static [ThemeDescriptor] {
	builtins::descriptors()
}

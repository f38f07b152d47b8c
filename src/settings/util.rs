use std::collections::HashSet;

/// Trim ids, drop empty ones, and keep the first occurrence of duplicates.
pub(super) fn sanitize_ids(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let id = value.trim();
		if id.is_empty() {
			continue;
		}
		if seen.insert(id.to_string()) {
			cleaned.push(id.to_string());
		}
	}
	cleaned
}

/// Trim a label, treating a blank value as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|text| text.trim().to_string())
		.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_trimmed_and_deduplicated() {
		let cleaned = sanitize_ids(vec![" 3 ".into(), "1".into(), "".into(), "3".into()]);
		assert_eq!(cleaned, vec!["3", "1"]);
	}

	#[test]
	fn blank_labels_are_unset() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some(" Team ".into())), Some("Team".into()));
		assert_eq!(non_blank(None), None);
	}
}

use anyhow::Result;
use chipz::PickOutcome;
use chipz::tui::style::ThemeDescriptor;

/// Format one `--list-themes` line: the name, then any aliases in brackets.
pub(crate) fn format_theme_line(descriptor: &ThemeDescriptor) -> String {
	if descriptor.aliases.is_empty() {
		return descriptor.name.clone();
	}
	format!("{} ({})", descriptor.name, descriptor.aliases.join(", "))
}

/// Format the picker outcome as plain text, one chip per line.
pub(crate) fn format_plain(outcome: &PickOutcome) -> String {
	if !outcome.accepted {
		return format!("Selection cancelled (query: '{}')", outcome.query);
	}
	if outcome.selected.is_empty() {
		return "No selection".to_string();
	}

	outcome
		.selected
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("\n")
}

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

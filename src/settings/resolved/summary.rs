use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	match &config.data_path {
		Some(path) => {
			let _ = writeln!(out, "  Data: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Data: (bundled)");
		}
	}
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Title: {}", config.labels.title);
	let _ = writeln!(out, "  Placeholder: {}", config.labels.placeholder);
	let _ = writeln!(out, "  List height: {}", config.list_height);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	if !config.preselect.is_empty() {
		let _ = writeln!(out, "  Preselected: {}", config.preselect.join(", "));
	}
	let _ = writeln!(out, "  Log level: {}", config.log.level);
	match config.log.destination() {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Log file: (disabled)");
		}
	}
	out
}

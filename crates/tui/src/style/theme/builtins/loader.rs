//! Parses the TOML theme files bundled with the crate.
//!
//! A theme file names its colours once in an optional `[palette]` table and
//! refers to them from `[styles]`. A colour reference is a palette key, a
//! `#rrggbb` literal, or `reset`.

use std::collections::HashMap;

use anyhow::{Context, Result, bail, ensure};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeDescriptor};

pub(super) struct BuiltinThemes {
	/// Sorted by name.
	pub(super) themes: Vec<ThemeDescriptor>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	#[serde(default)]
	palette: HashMap<String, String>,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	chip: StyleSpec,
	armed: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	bold: bool,
	dim: bool,
	underlined: bool,
	reversed: bool,
	crossed_out: bool,
}

struct Palette(HashMap<String, Color>);

impl Palette {
	fn parse(entries: HashMap<String, String>) -> Result<Self> {
		entries
			.into_iter()
			.map(|(key, value)| {
				let color = parse_hex(&value)
					.with_context(|| format!("palette entry `{key}` is not a `#rrggbb` colour"))?;
				Ok((key, color))
			})
			.collect::<Result<HashMap<_, _>>>()
			.map(Self)
	}

	fn resolve(&self, reference: &str) -> Result<Color> {
		let reference = reference.trim();
		if reference.eq_ignore_ascii_case("reset") {
			return Ok(Color::Reset);
		}
		if reference.starts_with('#') {
			return parse_hex(reference);
		}
		match self.0.get(reference) {
			Some(color) => Ok(*color),
			None => bail!("`{reference}` is neither a palette entry nor a `#rrggbb` colour"),
		}
	}
}

impl StyleSpec {
	fn to_style(&self, palette: &Palette) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(palette.resolve(fg).context("invalid `fg`")?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(palette.resolve(bg).context("invalid `bg`")?);
		}

		let flags = [
			(self.bold, Modifier::BOLD),
			(self.dim, Modifier::DIM),
			(self.underlined, Modifier::UNDERLINED),
			(self.reversed, Modifier::REVERSED),
			(self.crossed_out, Modifier::CROSSED_OUT),
		];
		for (enabled, modifier) in flags {
			if enabled {
				style = style.add_modifier(modifier);
			}
		}
		Ok(style)
	}
}

impl ThemeStyles {
	fn into_theme(self, palette: &Palette) -> Result<Theme> {
		let style = |spec: &StyleSpec, slot: &str| {
			spec.to_style(palette)
				.with_context(|| format!("in `styles.{slot}`"))
		};
		Ok(Theme {
			header: style(&self.header, "header")?,
			row_highlight: style(&self.row_highlight, "row_highlight")?,
			prompt: style(&self.prompt, "prompt")?,
			empty: style(&self.empty, "empty")?,
			highlight: style(&self.highlight, "highlight")?,
			chip: style(&self.chip, "chip")?,
			armed: style(&self.armed, "armed")?,
		})
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut themes = Vec::new();
	let mut default_theme = None;

	for file in dir.files() {
		let (descriptor, is_default) = parse_theme_file(file)?;
		if is_default {
			ensure!(
				default_theme.is_none(),
				"more than one built-in theme is marked as default"
			);
			default_theme = Some(descriptor.theme);
		}
		themes.push(descriptor);
	}

	let Some(default_theme) = default_theme else {
		bail!("no built-in theme is marked as default");
	};
	themes.sort_unstable_by_key(|descriptor| descriptor.name.to_ascii_lowercase());

	Ok(BuiltinThemes {
		themes,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeDescriptor, bool)> {
	let path = file.path().display().to_string();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path} is not valid UTF-8"))?;
	let parsed: ThemeFile =
		toml::from_str(contents).with_context(|| format!("failed to parse theme file {path}"))?;

	let palette = Palette::parse(parsed.palette).with_context(|| format!("in {path}"))?;
	let theme = parsed
		.styles
		.into_theme(&palette)
		.with_context(|| format!("in {path}"))?;
	let aliases = parsed
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.collect();

	Ok((
		ThemeDescriptor {
			name: parsed.name,
			aliases,
			theme,
		},
		parsed.default,
	))
}

fn parse_hex(value: &str) -> Result<Color> {
	let Some(digits) = value.trim().strip_prefix('#') else {
		bail!("expected `#rrggbb`, found `{value}`");
	};
	ensure!(
		digits.len() == 6 && digits.chars().all(|ch| ch.is_ascii_hexdigit()),
		"expected `#rrggbb`, found `{value}`"
	);
	let rgb = u32::from_str_radix(digits, 16)?;
	let [_, r, g, b] = rgb.to_be_bytes();
	Ok(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn theme_from(source: &str) -> Result<Theme> {
		let parsed: ThemeFile = toml::from_str(source)?;
		let palette = Palette::parse(parsed.palette)?;
		parsed.styles.into_theme(&palette)
	}

	const PLAIN_STYLES: &str = r#"
[styles]
header = {}
row_highlight = {}
prompt = {}
empty = {}
highlight = {}
chip = {}
"#;

	#[test]
	fn styles_resolve_palette_entries_and_literals() {
		let theme = theme_from(&format!(
			"name = \"t\"\n[palette]\nink = \"#102030\"\n{PLAIN_STYLES}armed = {{ fg = \"ink\", bg = \"#FFFFFF\", bold = true, crossed_out = true }}\n"
		))
		.expect("theme parses");

		assert_eq!(theme.armed.fg, Some(Color::Rgb(0x10, 0x20, 0x30)));
		assert_eq!(theme.armed.bg, Some(Color::Rgb(255, 255, 255)));
		assert!(theme.armed.add_modifier.contains(Modifier::BOLD | Modifier::CROSSED_OUT));
		assert_eq!(theme.header, Style::new());
	}

	#[test]
	fn unknown_palette_reference_names_the_slot() {
		let err = theme_from(&format!(
			"name = \"t\"\n{PLAIN_STYLES}armed = {{ fg = \"crimson\" }}\n"
		))
		.expect_err("missing palette entry");
		let message = format!("{err:#}");
		assert!(message.contains("styles.armed"));
		assert!(message.contains("crimson"));
	}

	#[test]
	fn malformed_colours_and_fields_are_rejected() {
		assert!(parse_hex("#fff").is_err());
		assert!(parse_hex("#12345g").is_err());
		assert_eq!(parse_hex("#7aa2f7").expect("hex"), Color::Rgb(0x7a, 0xa2, 0xf7));
		assert!(theme_from(&format!("name = \"t\"\n{PLAIN_STYLES}armed = {{ blink = true }}\n")).is_err());
	}

	#[test]
	fn bundled_themes_load_with_one_default() {
		let dir = include_dir::include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");
		let themes = load_builtin_themes(&dir).expect("bundled themes load");
		let names: Vec<_> = themes
			.themes
			.iter()
			.map(|descriptor| descriptor.name.as_str())
			.collect();
		assert_eq!(names, ["mono", "paper", "slate"]);
		assert_eq!(themes.default_theme, themes.themes[2].theme);
	}
}

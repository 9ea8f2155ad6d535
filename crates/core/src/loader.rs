//! Loading content into a [`Registry`].
//!
//! The loader parses every partition a source yields, assembles each
//! language in manifest order, and applies a [`ValidationMode`] to the
//! result.

use std::fmt;

use docset_protocol::DocCategory;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assemble::assemble;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::source::{ContentSource, RawLanguage};
use crate::validate::{ValidationReport, validate};

/// What to do with validation results after loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
	/// Fail the load on any error-severity violation
	#[default]
	Strict,
	/// Log every violation and continue
	Warn,
	/// Skip validation
	Off,
}

impl std::str::FromStr for ValidationMode {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"strict" => Ok(ValidationMode::Strict),
			"warn" => Ok(ValidationMode::Warn),
			"off" => Ok(ValidationMode::Off),
			_ => Err(format!("unknown validation mode: {s}")),
		}
	}
}

impl fmt::Display for ValidationMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidationMode::Strict => write!(f, "strict"),
			ValidationMode::Warn => write!(f, "warn"),
			ValidationMode::Off => write!(f, "off"),
		}
	}
}

/// A loaded registry and, unless validation was off, its report.
#[derive(Debug)]
pub struct Loaded {
	pub registry: Registry,
	pub report: Option<ValidationReport>,
}

/// Builds a [`Registry`] from a [`ContentSource`].
pub struct Loader<S> {
	source: S,
	mode: ValidationMode,
}

impl<S: ContentSource> Loader<S> {
	pub fn new(source: S) -> Self {
		Self {
			source,
			mode: ValidationMode::default(),
		}
	}

	pub fn mode(mut self, mode: ValidationMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn load(&self) -> Result<Loaded> {
		let raw = self.source.read_languages()?;
		let languages = raw
			.into_iter()
			.map(assemble_raw)
			.collect::<Result<Vec<_>>>()?;
		let registry = Registry::new(languages);
		debug!(
			target = "docset",
			source = %self.source.describe(),
			languages = registry.len(),
			"assembled registry"
		);

		let report = match self.mode {
			ValidationMode::Off => None,
			ValidationMode::Strict => {
				let report = registry.validate();
				if !report.is_ok() {
					return Err(Error::Invalid(report));
				}
				Some(report)
			}
			ValidationMode::Warn => {
				let report = registry.validate();
				for violation in &report.violations {
					warn!(target = "docset", "{violation}");
				}
				Some(report)
			}
		};

		Ok(Loaded { registry, report })
	}
}

fn assemble_raw(raw: RawLanguage) -> Result<docset_protocol::LanguageConfig> {
	let partitions = raw
		.partitions
		.iter()
		.map(|partition| {
			let categories: Vec<DocCategory> =
				serde_json::from_str(&partition.text).map_err(|e| Error::parse(&partition.path, e))?;
			debug!(
				target = "docset",
				language = %raw.manifest.id,
				partition = %partition.path.display(),
				categories = categories.len(),
				"parsed partition"
			);
			Ok(categories)
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(assemble(raw.manifest, partitions))
}

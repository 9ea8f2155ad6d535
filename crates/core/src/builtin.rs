//! Content compiled into the crate.
//!
//! Files live under `content/<language>/` next to this crate's manifest and
//! use exactly the layout [`crate::DirSource`] reads, so the same tree can be
//! loaded from disk while it is being edited.

/// Pseudo-root used in paths of embedded files.
pub const BUILTIN_ROOT: &str = "<builtin>";

pub(crate) struct EmbeddedFile {
	pub name: &'static str,
	pub text: &'static str,
}

pub(crate) struct EmbeddedLanguage {
	pub dir: &'static str,
	pub manifest: &'static str,
	pub files: &'static [EmbeddedFile],
}

macro_rules! embed_language {
	($dir:literal, [ $($file:literal),+ $(,)? ]) => {
		EmbeddedLanguage {
			dir: $dir,
			manifest: include_str!(concat!("../content/", $dir, "/language.json")),
			files: &[
				$(
					EmbeddedFile {
						name: $file,
						text: include_str!(concat!("../content/", $dir, "/", $file)),
					},
				)+
			],
		}
	};
}

/// Registry order of the built-in languages.
pub(crate) const BUILTIN: &[EmbeddedLanguage] = &[
	embed_language!(
		"selenium",
		["fundamentals.json", "locators.json", "waits.json", "advanced.json"]
	),
	embed_language!("playwright", ["getting-started.json", "testing.json", "advanced.json"]),
];

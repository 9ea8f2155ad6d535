//! Language assembly: partitions in, one [`LanguageConfig`] out.
//!
//! Assembly is plain concatenation. Categories keep the order of the
//! partition they came from, and partitions keep the order they were given
//! in. Nothing is deduplicated or dropped; duplicate ids are reported by
//! [`crate::validate`] instead.

use docset_protocol::{DocCategory, LanguageConfig, LanguageManifest};

/// Concatenates partition arrays in order.
pub fn concat_partitions<I>(partitions: I) -> Vec<DocCategory>
where
	I: IntoIterator<Item = Vec<DocCategory>>,
{
	partitions.into_iter().flatten().collect()
}

/// Builds the config for `manifest` from its already-parsed partitions.
pub fn assemble<I>(manifest: LanguageManifest, partitions: I) -> LanguageConfig
where
	I: IntoIterator<Item = Vec<DocCategory>>,
{
	manifest.into_config(concat_partitions(partitions))
}

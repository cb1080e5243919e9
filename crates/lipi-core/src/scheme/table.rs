/// Embedded default scheme, validated by the build script.
pub(crate) const DEFAULT_TOML: &str = include_str!("default_scheme.toml");

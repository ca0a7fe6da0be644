use {
    crate::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Load a config of type `D` from a TOML file, letting environment variables
/// override individual keys. Nested keys are joined with `__`, so
/// `OUTPUT__JSON=true` sets `output.json`.
///
/// A missing file is not an error: every key then comes from the environment
/// or from `D`'s serde defaults.
pub fn parse_config<P, D>(path: P) -> Result<D, Error>
where
    P: AsRef<Path>,
    D: DeserializeOwned,
{
    let env_override = Environment::default().separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

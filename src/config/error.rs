use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("toml parsing error: {0}")]
    TomlFormatError(#[from] toml::de::Error),
    #[error("toml serialization error: {0}")]
    TomlSerializeError(toml::ser::Error),
    #[error("invalid configuration: {0}")]
    ConfigFormatError(String),
}

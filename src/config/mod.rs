//! Module to instantiate containers from a configuration string.
//!
//! Configurations describe containers using the
//! [`toml`](https://toml.io/en/) format. Every configuration is a toml
//! table with an `id` field naming the configuration format, and the
//! fields of this format.
//!
//! ```
//! use tidbits::config::{ConfigInstance, MinMaxConfig};
//!
//! let config_str = "
//! id = 'MinMaxConfig'
//! initial = 10
//! updates = [3, 15]
//! ";
//! let minmax = MinMaxConfig::<i64>::from_string(config_str)
//!     .unwrap()
//!     .build();
//! assert_eq!(*minmax.minimum(), 3);
//! assert_eq!(*minmax.current(), 15);
//! assert_eq!(*minmax.maximum(), 15);
//! ```
//!
//! See the [`configs`](configs/index.html) module for the collection of
//! containers configuration format.

use serde::{de::DeserializeOwned, Serialize};

/// Trait used to instantiate a configuration object from a toml
/// configuration and build a container.
///
/// The configuration object obtained with
/// [`from_toml()`](trait.ConfigInstance.html#method.from_toml) has been
/// checked to be valid and can later be turned into a container with
/// [`build()`](trait.ConfigInstance.html#tymethod.build).
pub trait ConfigInstance: Sized + Serialize + DeserializeOwned {
    /// The container built by this configuration.
    type Container;

    /// The value of the `id` field identifying this configuration.
    fn id() -> &'static str;

    /// Check the configuration content once it has been parsed.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Build the container described by this configuration.
    fn build(self) -> Self::Container;

    /// Create this configuration from a parsed toml [`toml::Value`].
    ///
    /// This function checks that:
    /// * The toml configuration is a toml `Table`,
    /// * The toml configuration contains an "id" field,
    /// * The value of the "id" field is this configuration id,
    /// * The remaining fields match this configuration format.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Container configuration must be a toml table.",
                )))
            }
        };

        match table.get("id").map(|id| id.as_str()) {
            None => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Configuration must have an 'id' field.",
                )))
            }
            Some(None) => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Invalid id type, must be a string.",
                )))
            }
            Some(Some(id)) if id != Self::id() => {
                return Err(ConfigError::ConfigFormatError(format!(
                    "Invalid id '{}', expected '{}'.",
                    id,
                    Self::id()
                )))
            }
            Some(Some(_)) => {}
        }

        let config = value.clone().try_into::<Self>().map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid {}: {}",
                Self::id(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Create this configuration from a toml string.
    fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(s)?;
        Self::from_toml(&value)
    }

    /// Render this configuration as a toml string that
    /// [`from_string()`](trait.ConfigInstance.html#method.from_string)
    /// accepts.
    fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSerializeError)
    }
}

/// Describe an existing container as a configuration.
///
/// Building the returned configuration creates a container equal to
/// `self` at the time of the call.
pub trait IntoConfig<C: ConfigInstance> {
    fn as_config(&self) -> C;
}

mod error;
pub use error::ConfigError;
mod minmax;
mod set;
mod slice;
mod tuple;

/// The collection of available configurations.
pub mod configs {
    pub use super::minmax::MinMaxConfig;
    pub use super::set::SetConfig;
    pub use super::slice::SliceConfig;
    pub use super::tuple::TupleConfig;
}
pub use configs::*;

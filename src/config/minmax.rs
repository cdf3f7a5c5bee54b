use crate::config::{ConfigError, ConfigInstance, IntoConfig};
use crate::MinMax;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Configuration format for [`MinMax`](../struct.MinMax.html) trackers.
///
/// This configuration format is composed of the following fields:
/// - `id = "MinMaxConfig"` (required),
/// - `initial = <value>` (required) the value seeding the tracker,
/// - `updates = [<value>, ...]` (optional) values fed in order to
/// [`update()`](../struct.MinMax.html#method.update) after creation.
///
/// A tracker built from this configuration reports the minimum and
/// maximum over `initial` and `updates`, and the last of `updates` as
/// its current value.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MinMaxConfig<T> {
    #[allow(dead_code)]
    id: String,
    initial: T,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    updates: Vec<T>,
}

impl<T> ConfigInstance for MinMaxConfig<T>
where
    T: PartialOrd + Clone + Serialize + DeserializeOwned,
{
    type Container = MinMax<T>;

    fn id() -> &'static str {
        "MinMaxConfig"
    }

    /// Values must be comparable with each other.
    fn validate(&self) -> Result<(), ConfigError> {
        let incomparable = self
            .updates
            .iter()
            .chain(std::iter::once(&self.initial))
            .any(|v| v.partial_cmp(v).is_none());
        if incomparable {
            Err(ConfigError::ConfigFormatError(String::from(
                "Invalid MinMaxConfig: values must be comparable.",
            )))
        } else {
            Ok(())
        }
    }

    fn build(self) -> MinMax<T> {
        let mut minmax = MinMax::new(self.initial);
        for v in self.updates {
            minmax.update(v);
        }
        minmax
    }
}

impl<T> IntoConfig<MinMaxConfig<T>> for MinMax<T>
where
    T: PartialOrd + Clone + Serialize + DeserializeOwned,
{
    /// The tracker state is replayed as an initial value followed by
    /// updates reaching the same minimum, maximum and current values.
    fn as_config(&self) -> MinMaxConfig<T> {
        MinMaxConfig {
            id: String::from(MinMaxConfig::<T>::id()),
            initial: self.minimum().clone(),
            updates: vec![self.maximum().clone(), self.current().clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MinMaxConfig;
    use crate::config::tests::test_config_round_trip;
    use crate::config::{ConfigError, ConfigInstance};
    use crate::MinMax;

    #[test]
    fn test_without_updates() {
        let config_str = "id='MinMaxConfig'\ninitial=-4";
        let minmax =
            MinMaxConfig::<i32>::from_string(config_str).unwrap().build();
        assert_eq!(minmax, MinMax::new(-4));
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut table = toml::value::Table::new();
        table.insert(
            String::from("id"),
            toml::Value::String(String::from("MinMaxConfig")),
        );
        table.insert(String::from("initial"), toml::Value::Float(1.0));
        table.insert(
            String::from("updates"),
            toml::Value::Array(vec![toml::Value::Float(f64::NAN)]),
        );
        assert!(matches!(
            MinMaxConfig::<f64>::from_toml(&toml::Value::Table(table)),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_minmax_as_config() {
        let mut minmax = MinMax::new(10i64);
        minmax.update(3);
        minmax.update(15);
        minmax.update(7);
        test_config_round_trip(minmax);
        test_config_round_trip(MinMax::new(String::from("only")));
    }
}

use crate::config::{ConfigInstance, IntoConfig};
use crate::Slice;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Configuration format for [`Slice`](../struct.Slice.html) containers.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "SliceConfig"` and
/// - `values = [<value>, ...]`
///
/// The `id` field must be exactly "SliceConfig" while `values` lists the
/// initial content of the slice, in order.
/// ```
/// use tidbits::config::{ConfigInstance, SliceConfig};
///
/// let config_str = "
/// id = 'SliceConfig'
/// values = [5, 3, 8]
/// ";
/// let slice = SliceConfig::<u32>::from_string(config_str)
///     .unwrap()
///     .build();
/// assert_eq!(slice.values(), &[5, 3, 8]);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SliceConfig<T> {
    #[allow(dead_code)]
    id: String,
    values: Vec<T>,
}

impl<T: Serialize + DeserializeOwned> ConfigInstance for SliceConfig<T> {
    type Container = Slice<T>;

    fn id() -> &'static str {
        "SliceConfig"
    }

    fn build(self) -> Slice<T> {
        Slice::new(self.values)
    }
}

impl<T> IntoConfig<SliceConfig<T>> for Slice<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    fn as_config(&self) -> SliceConfig<T> {
        SliceConfig {
            id: String::from(SliceConfig::<T>::id()),
            values: self.values().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SliceConfig;
    use crate::config::tests::test_config_round_trip;
    use crate::config::ConfigInstance;
    use crate::Slice;

    #[test]
    fn test_valid_slice_config() {
        let config_str = "id='SliceConfig'\nvalues=['b', 'a', 'b']";
        let value: toml::Value = toml::from_str(config_str).unwrap();
        let config = SliceConfig::<String>::from_toml(&value).unwrap();
        let slice = config.build();
        assert_eq!(slice.values(), &["b", "a", "b"]);
    }

    #[test]
    fn test_empty_slice_config() {
        let config_str = "id='SliceConfig'\nvalues=[]";
        let slice =
            SliceConfig::<i64>::from_string(config_str).unwrap().build();
        assert!(slice.is_empty());
    }

    #[test]
    fn test_slice_as_config() {
        test_config_round_trip(Slice::new(vec![4i64, -1, 4, 0]));
        test_config_round_trip(Slice::<f64>::default());
    }
}

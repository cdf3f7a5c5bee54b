use crate::config::{ConfigInstance, IntoConfig};
use crate::Set;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::hash::Hash;

/// Configuration format for [`Set`](../struct.Set.html) containers.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "SetConfig"` and
/// - `values = [<value>, ...]`
///
/// Duplicate `values` collapse into one element of the set.
/// ```
/// use tidbits::config::{ConfigInstance, SetConfig};
///
/// let set = SetConfig::<String>::from_string("
/// id = 'SetConfig'
/// values = ['a', 'b', 'a']
/// ").unwrap().build();
/// assert_eq!(set.len(), 2);
/// assert!(set.has(&String::from("a")));
/// ```
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SetConfig<T> {
    #[allow(dead_code)]
    id: String,
    values: Vec<T>,
}

impl<T> ConfigInstance for SetConfig<T>
where
    T: Eq + Hash + Serialize + DeserializeOwned,
{
    type Container = Set<T>;

    fn id() -> &'static str {
        "SetConfig"
    }

    fn build(self) -> Set<T> {
        Set::from_values(self.values)
    }
}

impl<T> IntoConfig<SetConfig<T>> for Set<T>
where
    T: Eq + Hash + Clone + Serialize + DeserializeOwned,
{
    fn as_config(&self) -> SetConfig<T> {
        SetConfig {
            id: String::from(SetConfig::<T>::id()),
            values: self.values(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SetConfig;
    use crate::config::tests::test_config_round_trip;
    use crate::config::ConfigInstance;
    use crate::Set;

    #[test]
    fn test_valid_set_config() {
        let set = SetConfig::<u16>::from_string(
            "id='SetConfig'\nvalues=[3, 1, 3, 2]",
        )
        .unwrap()
        .build();
        assert_eq!(set, Set::from_values(vec![1, 2, 3]));
    }

    #[test]
    fn test_set_as_config() {
        test_config_round_trip(Set::from_values(vec!['x', 'y', 'z']));
        test_config_round_trip(Set::<u8>::new());
    }
}

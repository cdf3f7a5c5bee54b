use crate::config::{ConfigInstance, IntoConfig};
use crate::Tuple;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Configuration format for [`Tuple`](../struct.Tuple.html) containers.
///
/// This configuration format is composed of three key/value fields that
/// must be present:
/// - `id = "TupleConfig"`,
/// - `first = <value>` and
/// - `second = <value>`.
/// ```
/// use tidbits::config::{ConfigInstance, TupleConfig};
///
/// let pair = TupleConfig::<u8, String>::from_string("
/// id = 'TupleConfig'
/// first = 1
/// second = 'x'
/// ").unwrap().build();
/// assert_eq!(*pair.get1(), 1);
/// assert_eq!(pair.get2(), "x");
/// ```
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TupleConfig<T1, T2> {
    #[allow(dead_code)]
    id: String,
    first: T1,
    second: T2,
}

impl<T1, T2> ConfigInstance for TupleConfig<T1, T2>
where
    T1: Serialize + DeserializeOwned,
    T2: Serialize + DeserializeOwned,
{
    type Container = Tuple<T1, T2>;

    fn id() -> &'static str {
        "TupleConfig"
    }

    fn build(self) -> Tuple<T1, T2> {
        Tuple::new(self.first, self.second)
    }
}

impl<T1, T2> IntoConfig<TupleConfig<T1, T2>> for Tuple<T1, T2>
where
    T1: Clone + Serialize + DeserializeOwned,
    T2: Clone + Serialize + DeserializeOwned,
{
    fn as_config(&self) -> TupleConfig<T1, T2> {
        TupleConfig {
            id: String::from(TupleConfig::<T1, T2>::id()),
            first: self.get1().clone(),
            second: self.get2().clone(),
        }
    }
}

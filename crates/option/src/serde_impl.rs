//! Text-interchange adapter: absent is the format's null literal.
//!
//! Deserializing null yields an absent optional; anything else is decoded as
//! `T`, and a decode failure surfaces as the format's own error. Struct fields
//! that may be omitted entirely need `#[serde(default)]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

//! Field deserializers that never reject an item.
//!
//! The backend is loose about item data: fields arrive as `null`, with the
//! wrong JSON type, or with numbers quoted. Each helper maps what it cannot
//! read to the field's empty value so the display fallbacks apply.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Loose<T> {
    fn ok(self) -> Option<T> {
        match self {
            Loose::Value(v) => Some(v),
            Loose::Other(_) => None,
        }
    }
}

/// Value of the expected type, or `T::default()` for `null` and mistyped values.
pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Loose::<T>::deserialize(d)?.ok().unwrap_or_default())
}

/// Elements that parse. Unreadable elements are skipped; a non-array is empty.
pub fn vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Loose::<Vec<Loose<T>>>::deserialize(d)?.ok().unwrap_or_default();
    Ok(items.into_iter().filter_map(Loose::ok).collect())
}

/// Non-negative count sent as a number or a numeric string.
pub fn count<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u32),
        Float(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Count::deserialize(d)? {
        Count::Int(n) => Some(n),
        Count::Float(f) if f.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&f) => {
            Some(f as u32)
        }
        Count::Text(s) => s.trim().parse().ok(),
        Count::Float(_) | Count::Other(_) => None,
    })
}

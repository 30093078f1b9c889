use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
///
/// Use together with `#[serde(default)]`, e.g. for `max_supply`, which the upstream
/// reports as `null` for uncapped coins.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Millisecond timestamps arrive as integers, but some series encode them as floats.
#[allow(clippy::cast_possible_truncation)]
pub fn millis_from_any_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyNumber {
        I64(i64),
        F64(f64),
    }

    match AnyNumber::deserialize(deserializer)? {
        AnyNumber::I64(i) => Ok(i),
        AnyNumber::F64(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        AnyNumber::F64(f) => Err(serde::de::Error::custom(format!(
            "cannot convert {f} to a millisecond timestamp"
        ))),
    }
}

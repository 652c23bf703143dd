use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Some response values are `null` for whatever reason even though they shouldn't be. Replaces
/// them with the [`Default`] implementation of the corresponding type.
pub(crate) fn deserialize_maybe_null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Counts (episodes, chapters) are delivered as numbers by some sources and as strings (`"12"`,
/// `"12 Eps"`, `"?"`) by others. Anything without a leading number becomes 0.
pub(crate) fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => Ok(number
            .as_u64()
            .or_else(|| number.as_f64().map(|f| f.max(0.0) as u64))
            .unwrap_or_default()
            .min(u32::MAX as u64) as u32),
        Value::String(string) => Ok(string
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or_default()),
        Value::Null => Ok(0),
        other => Err(D::Error::custom(format!("not a count: '{other}'"))),
    }
}

/// Labels which are sometimes a string and sometimes a number (e.g. episode titles which are just
/// the episode number).
pub(crate) fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(string) => Ok(string),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(bool) => Ok(bool.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("not a label: '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Count(#[serde(deserialize_with = "deserialize_lenient_count")] u32);

    #[derive(Deserialize)]
    struct Label(#[serde(deserialize_with = "deserialize_string_or_number")] String);

    #[test]
    fn lenient_counts() {
        for (value, expected) in [
            (json!(12), 12),
            (json!("24"), 24),
            (json!("12 Eps"), 12),
            (json!("?"), 0),
            (json!(null), 0),
        ] {
            assert_eq!(serde_json::from_value::<Count>(value).unwrap().0, expected)
        }
        assert!(serde_json::from_value::<Count>(json!([1])).is_err())
    }

    #[test]
    fn labels() {
        assert_eq!(serde_json::from_value::<Label>(json!(3)).unwrap().0, "3");
        assert_eq!(serde_json::from_value::<Label>(json!("Special")).unwrap().0, "Special");
        assert_eq!(serde_json::from_value::<Label>(json!(null)).unwrap().0, "")
    }
}

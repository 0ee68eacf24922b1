//! Serde adapters shared by the resource wire formats.

use serde::{Deserialize, Deserializer};

/// Read `null` as the field's default. Clients send `"id": null` for records
/// that have no identifier yet.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Local date-times in ISO-8601 form.
///
/// Input may omit seconds (`2022-01-03T00:00`) or carry a fraction
/// (`2022-01-03T00:00:00.123`). Output is chrono's default form.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid ISO-8601 date-time: {raw}")))
    }
}

mod account;
mod direct;
mod status;
mod timeline;
mod tweet;

pub use account::{Account, AuthIdentity};
pub use direct::DirectRecord;
pub use status::{parse_created_at, DirectMessage, Entities, Status, User, UserMention};
pub use timeline::TimelineBucket;
pub use tweet::TweetRecord;

use serde::Deserializer;

/// Helper to deserialize an id given either as a JSON number or as a string.
///
/// The service sends 64-bit ids as numbers, but some payloads (and hand-written
/// fixtures) carry them as strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Same as [`deserialize_id`] for nullable ids such as `in_reply_to_status_id`.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_id")] i64);

    let wrapped: Option<Wrapper> = serde::Deserialize::deserialize(deserializer)?;
    Ok(wrapped.map(|Wrapper(id)| id))
}

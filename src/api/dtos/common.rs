use serde::Deserialize;
use utoipa::IntoParams;

/// Raw listing query values. Kept as strings so the listing validation owns
/// all parsing and its failures surface as the enveloped 400, not as an
/// actix deserialization error.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListingParams {
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<String>,
}

impl ListingParams {
    /// Whether the request carried any cursor at all; distinguishes the
    /// first-page case from a cursor that resolved to no entity.
    pub fn has_cursor(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }
}

/// Serializes snowflake ids as decimal strings: they exceed the integer
/// range JSON consumers can represent losslessly.
pub mod id_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// `id_string` over a list of ids.
pub mod id_string_vec {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ids: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(ids.iter().map(i64::to_string))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|value| value.parse().map_err(serde::de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "id_string")]
        id: i64,
        #[serde(with = "id_string_vec")]
        linked: Vec<i64>,
    }

    #[test]
    fn ids_serialize_as_strings() {
        let value = serde_json::to_value(Wrapper {
            id: 459022949461131264,
            linked: vec![1, 2],
        })
        .unwrap();

        assert_eq!(
            value,
            json!({"id": "459022949461131264", "linked": ["1", "2"]})
        );
    }

    #[test]
    fn ids_deserialize_from_strings() {
        let wrapper: Wrapper =
            serde_json::from_value(json!({"id": "42", "linked": ["7"]})).unwrap();
        assert_eq!(wrapper.id, 42);
        assert_eq!(wrapper.linked, vec![7]);
    }

    #[test]
    fn has_cursor_ignores_limit() {
        assert!(!ListingParams::default().has_cursor());
        assert!(ListingParams {
            before: Some("5".to_string()),
            ..Default::default()
        }
        .has_cursor());
        assert!(!ListingParams {
            limit: Some("10".to_string()),
            ..Default::default()
        }
        .has_cursor());
    }
}

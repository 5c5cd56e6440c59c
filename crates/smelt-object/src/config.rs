use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How the object item's tag value is chosen when none is given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagPolicy {
    /// One tag: the creation time, RFC 3339 UTC with milliseconds.
    Timestamp,
    /// A fixed tag list, for reproducible dumps.
    Fixed(Vec<String>),
}

impl TagPolicy {
    pub fn tags(&self) -> Vec<String> {
        match self {
            Self::Timestamp => vec![Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)],
            Self::Fixed(tags) => tags.clone(),
        }
    }
}

/// Settings for the object layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Tags used by `create_object` when the caller gives none.
    pub default_tags: TagPolicy,
    /// Joins tags into the object item's value. Tags must not contain it.
    pub tag_separator: String,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            default_tags: TagPolicy::Timestamp,
            tag_separator: "\n".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ObjectConfig::default();
        assert_eq!(c.default_tags, TagPolicy::Timestamp);
        assert_eq!(c.tag_separator, "\n");
    }

    #[test]
    fn timestamp_tag_is_rfc3339_utc() {
        let tags = TagPolicy::Timestamp.tags();
        assert_eq!(tags.len(), 1);
        assert!(tags[0].ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&tags[0]).is_ok());
    }

    #[test]
    fn fixed_tags_are_returned_verbatim() {
        let policy = TagPolicy::Fixed(vec!["contact".into(), "v1".into()]);
        assert_eq!(policy.tags(), vec!["contact", "v1"]);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let c: ObjectConfig = serde_json::from_str(r#"{"tag_separator": ","}"#).unwrap();
        assert_eq!(c.tag_separator, ",");
        assert_eq!(c.default_tags, TagPolicy::Timestamp);
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// How long a flag is expected to live.
///
/// Serializes lowercase; parsing (from a string or through serde) ignores case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Removed once the feature it gates is fully launched or abandoned.
    Temporary,
    /// A long-lived operational switch.
    Permanent,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown lifecycle '{0}', expected 'temporary' or 'permanent'")]
pub struct ParseLifecycleError(String);

impl Lifecycle {
    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Temporary => "temporary",
            Lifecycle::Permanent => "permanent",
        }
    }

    pub fn is_temporary(self) -> bool {
        self == Lifecycle::Temporary
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Lifecycle {
    type Err = ParseLifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("temporary") {
            Ok(Lifecycle::Temporary)
        } else if s.eq_ignore_ascii_case("permanent") {
            Ok(Lifecycle::Permanent)
        } else {
            Err(ParseLifecycleError(s.to_owned()))
        }
    }
}

impl<'de> Deserialize<'de> for Lifecycle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Temporary".parse::<Lifecycle>(), Ok(Lifecycle::Temporary));
        assert_eq!("PERMANENT".parse::<Lifecycle>(), Ok(Lifecycle::Permanent));
    }

    #[test]
    fn unknown_lifecycle_is_an_error() {
        let err = "forever".parse::<Lifecycle>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown lifecycle 'forever', expected 'temporary' or 'permanent'"
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Lifecycle::Permanent).unwrap(),
            serde_json::json!("permanent")
        );
        let parsed: Lifecycle = serde_json::from_str(r#""temporary""#).unwrap();
        assert!(parsed.is_temporary());
    }

    #[test]
    fn serde_and_from_str_accept_the_same_spellings() {
        for raw in ["permanent", "Permanent", "PERMANENT"] {
            let from_serde: Lifecycle = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(Ok(from_serde), raw.parse::<Lifecycle>());
        }

        let err = serde_json::from_value::<Lifecycle>(serde_json::json!("forever")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown lifecycle 'forever', expected 'temporary' or 'permanent'"
        );
    }
}

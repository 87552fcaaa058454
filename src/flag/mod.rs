mod typed;
mod value;

pub use typed::{
    BoolFlag, FloatFlag, IntFlag, StringFlag, TypedFlag, make_bool_flag, make_float_flag,
    make_int_flag, make_string_flag,
};
pub use value::{FlagKind, FlagValue};

use crate::{FlagDescriptor, Flagger, Lifecycle};

/// The capability every flag kind exposes, whatever the type of its value.
///
/// Registries and generic tooling work with `dyn Flag`; call sites that know the
/// flag's type use the concrete [`TypedFlag`] handle instead.
pub trait Flag: std::fmt::Debug + Send + Sync + 'static {
    /// Human-readable display name.
    fn name(&self) -> &str;

    /// Machine identifier, unique within a registry.
    fn key(&self) -> &str;

    /// The team or person responsible for the flag.
    fn owner(&self) -> &str;

    fn lifecycle(&self) -> Lifecycle;

    /// Whether the flag is enabled in the open source distribution.
    fn enabled_in_oss(&self) -> bool;

    fn kind(&self) -> FlagKind;

    /// The declared default, as JSON.
    fn default_json(&self) -> serde_json::Value;

    /// Evaluate the flag against `flagger`, as JSON.
    fn evaluate_json(&self, flagger: &dyn Flagger) -> serde_json::Value;

    fn as_any(&self) -> &dyn std::any::Any;
}

impl dyn Flag {
    /// Recover the typed handle, if this flag carries a `T`.
    pub fn downcast_ref<T: FlagValue>(&self) -> Option<&TypedFlag<T>> {
        self.as_any().downcast_ref()
    }

    pub fn descriptor(&self) -> FlagDescriptor {
        FlagDescriptor::of(self)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("Flag with key '{0}' has an empty name")]
    EmptyName(String),

    #[error("Flag named '{0}' has an empty key")]
    EmptyKey(String),

    #[error(
        "Flag key '{0}' is invalid: it must start with an ASCII letter and contain only ASCII letters and digits"
    )]
    InvalidKey(String),

    #[error("Flag '{0}' has a default that can't be represented as JSON")]
    InvalidDefault(String),
}

pub(crate) fn validate(name: &str, key: &str) -> Result<(), FlagError> {
    if key.is_empty() {
        return Err(FlagError::EmptyKey(name.to_owned()));
    }

    let mut chars = key.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if !well_formed {
        return Err(FlagError::InvalidKey(key.to_owned()));
    }

    if name.trim().is_empty() {
        return Err(FlagError::EmptyName(key.to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_camel_case_keys() {
        assert_eq!(validate("App Metrics", "appMetrics"), Ok(()));
        assert_eq!(validate("Version 2", "v2"), Ok(()));
        assert_eq!(validate("X", "X"), Ok(()));
    }

    #[test]
    fn rejects_empty_key() {
        assert_eq!(
            validate("App Metrics", ""),
            Err(FlagError::EmptyKey("App Metrics".into()))
        );
    }

    #[test]
    fn rejects_keys_outside_the_grammar() {
        for key in ["2fast", "app-metrics", "app_metrics", "app metrics", "ünicode"] {
            assert_eq!(
                validate("Name", key),
                Err(FlagError::InvalidKey(key.into())),
                "{key}"
            );
        }
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            validate("", "appMetrics"),
            Err(FlagError::EmptyName("appMetrics".into()))
        );
        assert_eq!(
            validate("   ", "appMetrics"),
            Err(FlagError::EmptyName("appMetrics".into()))
        );
    }
}

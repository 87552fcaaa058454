use std::sync::Arc;

use super::{Flag, FlagError, FlagKind, FlagValue};
use crate::{Flagger, Lifecycle};

pub type BoolFlag = TypedFlag<bool>;
pub type IntFlag = TypedFlag<i64>;
pub type FloatFlag = TypedFlag<f64>;
pub type StringFlag = TypedFlag<String>;

#[derive(Debug)]
struct Definition<T> {
    name: String,
    key: String,
    owner: String,
    default: T,
    lifecycle: Lifecycle,
    enabled_in_oss: bool,
}

/// A validated, immutable flag whose value is a `T`.
///
/// Clones share one definition, so the handle returned by an accessor and the
/// one stored in a [`crate::Registry`] are the same flag (see [`TypedFlag::ptr_eq`]).
#[derive(Debug)]
pub struct TypedFlag<T: FlagValue> {
    inner: Arc<Definition<T>>,
}

impl<T: FlagValue> Clone for TypedFlag<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: FlagValue> TypedFlag<T> {
    pub fn try_new(
        name: impl Into<String>,
        key: impl Into<String>,
        owner: impl Into<String>,
        default: T,
        lifecycle: Lifecycle,
        enabled_in_oss: bool,
    ) -> Result<Self, FlagError> {
        let name = name.into();
        let key = key.into();
        super::validate(&name, &key)?;
        if !default.is_valid_default() {
            return Err(FlagError::InvalidDefault(key));
        }

        Ok(Self {
            inner: Arc::new(Definition {
                name,
                key,
                owner: owner.into(),
                default,
                lifecycle,
                enabled_in_oss,
            }),
        })
    }

    /// The declared default.
    pub fn value(&self) -> T {
        self.inner.default.clone()
    }

    /// Ask `flagger` for the flag's value, falling back to the declared default
    /// when it has none or returns a value of the wrong type.
    #[cfg_attr(
        feature = "tracing-instrument",
        tracing::instrument(skip(self, flagger), fields(key = %self.inner.key))
    )]
    pub fn evaluate(&self, flagger: &dyn Flagger) -> T {
        let Some(value) = flagger.value(self) else {
            return self.value();
        };

        match T::from_json(&value) {
            Some(v) => v,
            None => {
                tracing::debug!(
                    key = %self.inner.key,
                    %value,
                    expected = %T::KIND,
                    "Flagger returned a value of the wrong type, using the default"
                );
                self.value()
            }
        }
    }

    /// Whether both handles refer to the same declaration.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: FlagValue> Flag for TypedFlag<T> {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn key(&self) -> &str {
        &self.inner.key
    }

    fn owner(&self) -> &str {
        &self.inner.owner
    }

    fn lifecycle(&self) -> Lifecycle {
        self.inner.lifecycle
    }

    fn enabled_in_oss(&self) -> bool {
        self.inner.enabled_in_oss
    }

    fn kind(&self) -> FlagKind {
        T::KIND
    }

    fn default_json(&self) -> serde_json::Value {
        self.inner.default.to_json()
    }

    fn evaluate_json(&self, flagger: &dyn Flagger) -> serde_json::Value {
        self.evaluate(flagger).to_json()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

fn make_flag<T: FlagValue>(
    name: impl Into<String>,
    key: impl Into<String>,
    owner: impl Into<String>,
    default: T,
    lifecycle: Lifecycle,
    enabled_in_oss: bool,
) -> TypedFlag<T> {
    match TypedFlag::try_new(name, key, owner, default, lifecycle, enabled_in_oss) {
        Ok(flag) => flag,
        Err(e) => panic!("Invalid feature flag declaration: {e}"),
    }
}

/// Declare a boolean flag.
///
/// # Panics
///
/// If the name is blank or the key doesn't match `[a-zA-Z][a-zA-Z0-9]*`
/// (and, for float flags, if the default isn't finite).
/// Declarations run at startup, so a malformed one stops the process before
/// anything can read it. Use [`TypedFlag::try_new`] to get the error instead.
pub fn make_bool_flag(
    name: impl Into<String>,
    key: impl Into<String>,
    owner: impl Into<String>,
    default: bool,
    lifecycle: Lifecycle,
    enabled_in_oss: bool,
) -> BoolFlag {
    make_flag(name, key, owner, default, lifecycle, enabled_in_oss)
}

/// Declare an integer flag. Panics like [`make_bool_flag`].
pub fn make_int_flag(
    name: impl Into<String>,
    key: impl Into<String>,
    owner: impl Into<String>,
    default: i64,
    lifecycle: Lifecycle,
    enabled_in_oss: bool,
) -> IntFlag {
    make_flag(name, key, owner, default, lifecycle, enabled_in_oss)
}

/// Declare a float flag. Panics like [`make_bool_flag`].
pub fn make_float_flag(
    name: impl Into<String>,
    key: impl Into<String>,
    owner: impl Into<String>,
    default: f64,
    lifecycle: Lifecycle,
    enabled_in_oss: bool,
) -> FloatFlag {
    make_flag(name, key, owner, default, lifecycle, enabled_in_oss)
}

/// Declare a string flag. Panics like [`make_bool_flag`].
pub fn make_string_flag(
    name: impl Into<String>,
    key: impl Into<String>,
    owner: impl Into<String>,
    default: impl Into<String>,
    lifecycle: Lifecycle,
    enabled_in_oss: bool,
) -> StringFlag {
    make_flag(name, key, owner, default.into(), lifecycle, enabled_in_oss)
}

use serde::Serialize;

/// The type of a flag's value, as named in the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Bool,
    Int,
    Float,
    String,
}

impl FlagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagKind::Bool => "bool",
            FlagKind::Int => "int",
            FlagKind::Float => "float",
            FlagKind::String => "string",
        }
    }
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// A type a flag can carry as its value.
///
/// New flag kinds implement this trait; everything else (the [`super::Flag`]
/// capability, registry storage, evaluation) comes from [`super::TypedFlag`].
pub trait FlagValue: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const KIND: FlagKind;

    fn to_json(&self) -> serde_json::Value;

    /// Returns `None` when `value` is not of this type.
    fn from_json(value: &serde_json::Value) -> Option<Self>;

    /// Whether this value can be declared as a flag's default. A default must
    /// survive the trip through [`FlagValue::to_json`].
    fn is_valid_default(&self) -> bool {
        true
    }
}

impl FlagValue for bool {
    const KIND: FlagKind = FlagKind::Bool;

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Bool(*self)
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FlagValue for i64 {
    const KIND: FlagKind = FlagKind::Int;

    fn to_json(&self) -> serde_json::Value {
        (*self).into()
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FlagValue for f64 {
    const KIND: FlagKind = FlagKind::Float;

    // Non-finite floats have no JSON form and serialize as null.
    fn to_json(&self) -> serde_json::Value {
        (*self).into()
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_f64()
    }

    fn is_valid_default(&self) -> bool {
        self.is_finite()
    }
}

impl FlagValue for String {
    const KIND: FlagKind = FlagKind::String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.clone())
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_rejects_fractions_and_strings() {
        assert_eq!(i64::from_json(&json!(42)), Some(42));
        assert_eq!(i64::from_json(&json!(4.2)), None);
        assert_eq!(i64::from_json(&json!("42")), None);
    }

    #[test]
    fn float_accepts_integers() {
        assert_eq!(f64::from_json(&json!(3)), Some(3.0));
        assert_eq!(f64::from_json(&json!(0.25)), Some(0.25));
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(f64::NAN.to_json(), serde_json::Value::Null);
    }

    #[test]
    fn only_finite_floats_are_valid_defaults() {
        assert!(0.5f64.is_valid_default());
        assert!(!f64::NAN.is_valid_default());
        assert!(!f64::INFINITY.is_valid_default());
        assert!(String::new().is_valid_default());
    }

    #[test]
    fn bool_is_strict() {
        assert_eq!(bool::from_json(&json!(true)), Some(true));
        assert_eq!(bool::from_json(&json!("true")), None);
        assert_eq!(bool::from_json(&json!(1)), None);
    }

    #[test]
    fn kind_names_match_manifest_types() {
        assert_eq!(serde_json::to_value(FlagKind::Int).unwrap(), json!("int"));
        assert_eq!(<String as FlagValue>::KIND.to_string(), "string");
    }
}

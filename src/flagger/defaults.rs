use crate::{Flag, Flagger};

/// Evaluates every flag to its declared default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Defaults;

impl Flagger for Defaults {
    fn value(&self, flag: &dyn Flag) -> Option<serde_json::Value> {
        Some(flag.default_json())
    }
}

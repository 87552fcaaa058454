mod defaults;
pub use defaults::Defaults;

use crate::Flag;

/// A source of flag values consulted at evaluation time.
///
/// Flags themselves never change. A live value (a remote override, a per-request
/// setting) comes from a `Flagger`, which owns any synchronization it needs.
/// Returning `None`, or a value of the wrong type, makes the flag evaluate to its
/// declared default.
pub trait Flagger: Send + Sync {
    fn value(&self, flag: &dyn Flag) -> Option<serde_json::Value>;
}

impl<F: Flagger + ?Sized> Flagger for &F {
    fn value(&self, flag: &dyn Flag) -> Option<serde_json::Value> {
        (**self).value(flag)
    }
}

impl<F: Flagger + ?Sized> Flagger for std::sync::Arc<F> {
    fn value(&self, flag: &dyn Flag) -> Option<serde_json::Value> {
        (**self).value(flag)
    }
}

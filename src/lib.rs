pub mod catalog;
mod descriptor;
pub mod flag;
pub mod flagger;
mod lifecycle;
pub mod registry;

#[cfg(test)]
mod test;

pub use descriptor::FlagDescriptor;
pub use flag::{
    BoolFlag, Flag, FlagError, FlagKind, FlagValue, FloatFlag, IntFlag, StringFlag, TypedFlag,
    make_bool_flag, make_float_flag, make_int_flag, make_string_flag,
};
pub use flagger::{Defaults, Flagger};
pub use lifecycle::{Lifecycle, ParseLifecycleError};
pub use registry::{Registry, RegistryBuilder, RegistryError};

pub type Map = serde_json::Map<String, serde_json::Value>;

/// Build a [`Registry`] from flag references, in the order given.
///
/// Panics on a duplicate key or name, like [`RegistryBuilder::register`].
///
/// ```rust
/// use feature_flags::{Flag, Lifecycle, make_bool_flag, make_int_flag, registry};
///
/// let dark_mode = make_bool_flag("Dark Mode", "darkMode", "UI Team", false, Lifecycle::Temporary, true);
/// let page_size = make_int_flag("Page Size", "pageSize", "API Team", 50, Lifecycle::Permanent, true);
///
/// let registry = registry![&dark_mode, &page_size];
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.lookup("pageSize").unwrap().name(), "Page Size");
/// ```
#[macro_export]
macro_rules! registry {
    ($($flag:expr),* $(,)?) => {{
        $crate::Registry::builder()
            $(.register(::std::clone::Clone::clone($flag)))*
            .build()
    }};
}

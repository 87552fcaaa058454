use std::collections::BTreeSet;

use super::Registry;
use crate::FlagDescriptor;

impl Registry {
    /// Describe how this registry differs from `previous`, one line per flag,
    /// sorted by key: `+flag:` for additions, `-flag:` for removals and `~flag:`
    /// for changed declarations.
    pub fn diff(&self, previous: &Registry) -> Vec<String> {
        let mut changes: Vec<String> = vec![];

        let all_keys: BTreeSet<&str> = self.keys().chain(previous.keys()).collect();
        for key in all_keys {
            let current = self.lookup(key).map(FlagDescriptor::of);
            let previous = previous.lookup(key).map(FlagDescriptor::of);

            match (current, previous) {
                (None, None) => continue,
                (None, Some(flag)) => changes.push(format!("-flag:{key}:{flag}")),
                (Some(flag), None) => changes.push(format!("+flag:{key}:{flag}")),
                (Some(current), Some(previous)) if current == previous => continue,
                (Some(current), Some(previous)) => {
                    changes.push(format!("~flag:{key}:{}", current.diff(&previous)))
                }
            }
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lifecycle, Registry, make_bool_flag, make_int_flag, registry};

    #[test]
    fn both_empty_returns_empty_vec() {
        assert!(registry![].diff(&registry![]).is_empty());
    }

    #[test]
    fn identical_declarations_return_empty_vec() {
        let build = || {
            let notebooks = make_bool_flag(
                "Notebooks",
                "notebooks",
                "Monitoring Team",
                false,
                Lifecycle::Temporary,
                true,
            );
            registry![&notebooks]
        };

        assert!(build().diff(&build()).is_empty());
    }

    #[test]
    fn add_remove_and_change_in_one_diff() {
        let stable = make_bool_flag("Stable", "stable", "Owner", true, Lifecycle::Permanent, true);
        let removed = make_bool_flag("Removed", "removed", "Owner", false, Lifecycle::Temporary, true);
        let added = make_int_flag("Added", "added", "Owner", 7, Lifecycle::Temporary, false);
        let before = make_bool_flag("Changed", "changed", "Owner", false, Lifecycle::Temporary, true);
        let after = make_bool_flag("Changed", "changed", "Owner", true, Lifecycle::Permanent, true);

        let previous: Registry = registry![&stable, &removed, &before];
        let current: Registry = registry![&stable, &added, &after];

        assert_eq!(
            current.diff(&previous),
            vec![
                String::from(
                    r#"+flag:added:name="Added" type=int default=7 lifecycle=temporary owner="Owner" oss=false"#
                ),
                String::from(
                    "~flag:changed:default: false -> true, lifecycle: temporary -> permanent"
                ),
                String::from(
                    r#"-flag:removed:name="Removed" type=bool default=false lifecycle=temporary owner="Owner" oss=true"#
                ),
            ]
        );
    }

    #[test]
    fn type_change_is_reported() {
        let before = make_bool_flag("Limit", "limit", "Owner", false, Lifecycle::Permanent, true);
        let after = make_int_flag("Limit", "limit", "Owner", 0, Lifecycle::Permanent, true);

        assert_eq!(
            registry![&after].diff(&registry![&before]),
            vec![String::from("~flag:limit:type: bool -> int, default: false -> 0")]
        );
    }
}

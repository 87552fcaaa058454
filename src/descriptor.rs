use serde::Serialize;

use crate::{Flag, FlagKind, Lifecycle};

/// A serializable snapshot of a flag's declaration.
///
/// Field names follow the manifest record a flag is generated from.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlagDescriptor {
    pub display_name: String,
    pub key: String,
    pub owner: String,
    #[serde(rename = "type")]
    pub kind: FlagKind,
    pub default_value: serde_json::Value,
    pub lifecycle: Lifecycle,
    #[serde(rename = "enabledInOSS")]
    pub enabled_in_oss: bool,
}

impl FlagDescriptor {
    pub fn of(flag: &dyn Flag) -> Self {
        Self {
            display_name: flag.name().to_owned(),
            key: flag.key().to_owned(),
            owner: flag.owner().to_owned(),
            kind: flag.kind(),
            default_value: flag.default_json(),
            lifecycle: flag.lifecycle(),
            enabled_in_oss: flag.enabled_in_oss(),
        }
    }

    pub fn diff(&self, previous: &Self) -> String {
        if self == previous {
            return "no change".into();
        }

        let mut diff: Vec<String> = vec![];
        if self.display_name != previous.display_name {
            diff.push(format!(
                "name: {:?} -> {:?}",
                previous.display_name, self.display_name
            ));
        }

        if self.key != previous.key {
            diff.push(format!("key: {:?} -> {:?}", previous.key, self.key));
        }

        if self.kind != previous.kind {
            diff.push(format!("type: {} -> {}", previous.kind, self.kind));
        }

        if self.default_value != previous.default_value {
            diff.push(format!(
                "default: {} -> {}",
                previous.default_value, self.default_value
            ));
        }

        if self.lifecycle != previous.lifecycle {
            diff.push(format!(
                "lifecycle: {} -> {}",
                previous.lifecycle, self.lifecycle
            ));
        }

        if self.owner != previous.owner {
            diff.push(format!("owner: {:?} -> {:?}", previous.owner, self.owner));
        }

        if self.enabled_in_oss != previous.enabled_in_oss {
            diff.push(format!(
                "oss: {} -> {}",
                previous.enabled_in_oss, self.enabled_in_oss
            ));
        }

        diff.join(", ")
    }
}

impl std::fmt::Display for FlagDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "name={:?} type={} default={} lifecycle={} owner={:?} oss={}",
            self.display_name,
            self.kind,
            self.default_value,
            self.lifecycle,
            self.owner,
            self.enabled_in_oss
        )
    }
}

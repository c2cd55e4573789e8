use serde::{Deserialize, Serialize};

use super::Matcher;

/// InhibitRule defines an inhibition rule that allows to mute alerts when other alerts are already firing.
/// See https://prometheus.io/docs/alerting/latest/configuration/#inhibit_rule
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InhibitRule {
    /// Matchers that have to be fulfilled in the alerts to be muted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_match: Vec<Matcher>,

    /// Matchers for which one or more alerts have to exist for the inhibition to take effect.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_match: Vec<Matcher>,

    /// Labels that must have an equal value in the source and target alert for the inhibition to take effect.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equal: Vec<String>,
}

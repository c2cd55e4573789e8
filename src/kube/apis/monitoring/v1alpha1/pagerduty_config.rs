use serde::{Deserialize, Serialize};

use crate::kube::apis::SecretKeySelector;

use super::HTTPConfig;

/// PagerDutyConfig configures notifications via PagerDuty.
/// See https://prometheus.io/docs/alerting/latest/configuration/#pagerduty_config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PagerDutyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,

    /// The secret's key that contains the PagerDuty integration key (when using Events API v2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<SecretKeySelector>,

    /// The secret's key that contains the PagerDuty service key (when using integration type "Prometheus").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_key: Option<SecretKeySelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    #[serde(rename = "clientURL", skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<PagerDutyConfigDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HTTPConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PagerDutyConfigDetail {
    pub key: String,
    pub value: String,
}

use serde::{Deserialize, Serialize};

use crate::kube::apis::SecretKeySelector;

use super::HTTPConfig;

/// WebhookConfig configures notifications via a generic receiver supporting the webhook payload.
/// See https://prometheus.io/docs/alerting/latest/configuration/#webhook_config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,

    /// The URL to send HTTP POST requests to. `urlSecret` takes precedence over `url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_secret: Option<SecretKeySelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HTTPConfig>,

    /// Maximum number of alerts to be sent per webhook message. 0 means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_alerts: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn zero_max_alerts_is_distinct_from_unset() {
        let unset: WebhookConfig = serde_json::from_str(r#"{"url":"http://hook"}"#).unwrap();
        let zero: WebhookConfig =
            serde_json::from_str(r#"{"url":"http://hook","maxAlerts":0}"#).unwrap();

        assert_eq!(unset.max_alerts, None);
        assert_eq!(zero.max_alerts, Some(0));
        assert_eq!(
            serde_json::to_string(&zero).unwrap(),
            r#"{"url":"http://hook","maxAlerts":0}"#
        );
        assert_eq!(serde_json::to_string(&unset).unwrap(), r#"{"url":"http://hook"}"#);
    }
}

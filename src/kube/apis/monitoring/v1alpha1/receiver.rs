use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{HTTPConfig, OpsGenieConfig, PagerDutyConfig, SlackConfig, WeChatConfig, WebhookConfig};

/// Receiver defines one or more notification integrations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receiver {
    /// Name of the receiver. Must be unique across all items from the list.
    pub name: String,

    #[serde(rename = "opsgenieConfigs", skip_serializing_if = "Vec::is_empty")]
    pub opsgenie_configs: Vec<OpsGenieConfig>,

    #[serde(rename = "pagerDutyConfigs", skip_serializing_if = "Vec::is_empty")]
    pub pagerduty_configs: Vec<PagerDutyConfig>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slack_configs: Vec<SlackConfig>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub webhook_configs: Vec<WebhookConfig>,

    #[serde(rename = "weChatConfigs", skip_serializing_if = "Vec::is_empty")]
    pub wechat_configs: Vec<WeChatConfig>,
}

impl Receiver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Every channel-level HTTP client configuration, in declaration order.
    pub fn http_configs(&self) -> impl Iterator<Item = &HTTPConfig> {
        let opsgenie = self.opsgenie_configs.iter().map(|c| &c.http_config);
        let pagerduty = self.pagerduty_configs.iter().map(|c| &c.http_config);
        let slack = self.slack_configs.iter().map(|c| &c.http_config);
        let webhook = self.webhook_configs.iter().map(|c| &c.http_config);
        let wechat = self.wechat_configs.iter().map(|c| &c.http_config);

        opsgenie
            .chain(pagerduty)
            .chain(slack)
            .chain(webhook)
            .chain(wechat)
            .flatten()
    }

    /// Runs the Slack validators, then the OpsGenie validators, then the HTTP client checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for config in &self.slack_configs {
            config.validate()?;
        }

        for config in &self.opsgenie_configs {
            config.validate()?;
        }

        for http_config in self.http_configs() {
            http_config.validate()?;
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::kube::apis::SecretKeySelector;

use super::HTTPConfig;

/// WeChatConfig configures notifications via WeChat.
/// See https://prometheus.io/docs/alerting/latest/configuration/#wechat_config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeChatConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,

    /// The secret's key that contains the WeChat API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<SecretKeySelector>,

    #[serde(rename = "apiURL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(rename = "corpID", skip_serializing_if = "Option::is_none")]
    pub corp_id: Option<String>,

    #[serde(rename = "agentID", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_party: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HTTPConfig>,
}

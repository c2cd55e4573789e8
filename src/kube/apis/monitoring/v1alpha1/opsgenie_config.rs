use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, kube::apis::SecretKeySelector};

use super::HTTPConfig;

static OPSGENIE_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(team|user|escalation|schedule)$").expect("invalid regex")
});

/// OpsGenieConfig configures notifications via OpsGenie.
/// See https://prometheus.io/docs/alerting/latest/configuration/#opsgenie_config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpsGenieConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,

    /// The secret's key that contains the OpsGenie API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<SecretKeySelector>,

    #[serde(rename = "apiURL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Comma separated list of tags attached to the notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<OpsGenieConfigDetail>,

    /// List of responders responsible for notifications.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responders: Vec<OpsGenieConfigResponder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HTTPConfig>,
}

impl OpsGenieConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for responder in &self.responders {
            responder.validate()?;
        }

        Ok(())
    }
}

/// OpsGenieConfigResponder defines a responder to an incident.
/// One of `id`, `name` or `username` has to be defined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OpsGenieConfigResponder {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// One of `team`, `user`, `escalation` or `schedule`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
}

impl OpsGenieConfigResponder {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() && self.name.is_empty() && self.username.is_empty() {
            return Err(ValidationError::OpsGenieResponderMissingIdentity);
        }

        if !OPSGENIE_TYPE_RE.is_match(&self.type_) {
            return Err(ValidationError::OpsGenieResponderType);
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OpsGenieConfigDetail {
    pub key: String,
    pub value: String,
}

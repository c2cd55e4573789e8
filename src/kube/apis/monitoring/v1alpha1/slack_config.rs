use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, kube::apis::SecretKeySelector};

use super::HTTPConfig;

/// SlackConfig configures notifications via Slack.
/// See https://prometheus.io/docs/alerting/latest/configuration/#slack_config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlackConfig {
    /// Whether or not to notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,

    /// The secret's key that contains the Slack webhook URL.
    #[serde(rename = "apiURL", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<SecretKeySelector>,

    /// The channel or user to send notifications to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// A list of Slack fields that are sent with each notification.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SlackField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_fields: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    #[serde(rename = "iconURL", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(rename = "thumbURL", skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_names: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,

    /// A list of Slack actions that are sent with each notification.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<SlackAction>,

    /// HTTP client configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HTTPConfig>,
}

impl SlackConfig {
    /// Checks every action, then every field, and returns the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for action in &self.actions {
            action.validate()?;
        }

        for field in &self.fields {
            field.validate()?;
        }

        Ok(())
    }
}

/// SlackAction configures a single Slack action that is sent with each notification.
/// See https://api.slack.com/docs/message-attachments#action_fields and https://api.slack.com/docs/message-buttons
/// for more information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlackAction {
    #[serde(rename = "type")]
    pub type_: String,

    pub text: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(rename = "confirm", skip_serializing_if = "Option::is_none")]
    pub confirm_field: Option<SlackConfirmationField>,
}

impl SlackAction {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.type_.is_empty() {
            return Err(ValidationError::SlackActionMissingType);
        }

        if self.text.is_empty() {
            return Err(ValidationError::SlackActionMissingText);
        }

        if self.url.is_empty() && self.name.is_empty() {
            return Err(ValidationError::SlackActionMissingNameOrUrl);
        }

        if let Some(confirm_field) = &self.confirm_field {
            confirm_field.validate()?;
        }

        Ok(())
    }
}

/// SlackConfirmationField protect users from destructive actions or particularly distinguished decisions
/// by asking them to confirm their button click one more time.
/// See https://api.slack.com/docs/interactive-message-field-guide#confirmation_fields for more information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlackConfirmationField {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismiss_text: Option<String>,
}

impl SlackConfirmationField {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::SlackConfirmationMissingText);
        }

        Ok(())
    }
}

/// SlackField configures a single Slack field that is sent with each notification.
/// Each field must contain a title, value, and optionally, a boolean value to indicate if the field
/// is short enough to be displayed next to other fields designated as short.
/// See https://api.slack.com/docs/message-attachments#fields for more information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlackField {
    pub title: String,

    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<bool>,
}

impl SlackField {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::SlackFieldMissingTitle);
        }

        if self.value.is_empty() {
            return Err(ValidationError::SlackFieldMissingValue);
        }

        Ok(())
    }
}

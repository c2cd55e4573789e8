use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationError,
    kube::apis::{
        monitoring::v1::{BasicAuth, SafeTLSConfig},
        SecretKeySelector,
    },
};

/// HTTPConfig defines a client HTTP configuration.
/// See https://prometheus.io/docs/alerting/latest/configuration/#http_config
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HTTPConfig {
    /// BasicAuth for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,

    /// The secret's key that contains the bearer token to be used by the client for authentication.
    /// The secret needs to be in the same namespace as the AlertmanagerConfig object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token_secret: Option<SecretKeySelector>,

    /// TLS configuration for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<SafeTLSConfig>,

    /// Optional proxy URL.
    #[serde(rename = "proxyURL", skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

impl HTTPConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(tls_config) = &self.tls_config {
            tls_config.validate()?;
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, kube::apis::SecretKeySelector};

use super::SecretOrConfigMap;

/// SafeTLSConfig specifies safe TLS configuration parameters.
///
/// Every credential is a reference into the resource's namespace; nothing is read from
/// the filesystem of the process that consumes the configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafeTLSConfig {
    /// Struct containing the CA cert to use for the targets.
    pub ca: SecretOrConfigMap,

    /// Struct containing the client cert file for the targets.
    pub cert: SecretOrConfigMap,

    /// Secret containing the client key file for the targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_secret: Option<SecretKeySelector>,

    /// Used to verify the hostname for the targets.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server_name: String,

    /// Disable target certificate validation.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub insecure_skip_verify: bool,
}

impl SafeTLSConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.ca.is_empty() {
            self.ca.validate()?;
        }

        if !self.cert.is_empty() {
            self.cert.validate()?;
        }

        if !self.cert.is_empty() && self.key_secret.is_none() {
            return Err(ValidationError::ClientCertWithoutKey);
        }

        if self.key_secret.is_some() && self.cert.is_empty() {
            return Err(ValidationError::ClientKeyWithoutCert);
        }

        Ok(())
    }
}

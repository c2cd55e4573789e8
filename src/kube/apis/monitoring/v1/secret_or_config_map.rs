use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationError,
    kube::apis::{ConfigMapKeySelector, SecretKeySelector},
};

/// SecretOrConfigMap allows to specify data as a Secret or ConfigMap. Fields are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretOrConfigMap {
    /// Secret containing data to use for the targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretKeySelector>,

    /// ConfigMap containing data to use for the targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapKeySelector>,
}

impl SecretOrConfigMap {
    /// Neither a secret nor a config map is referenced.
    pub fn is_empty(&self) -> bool {
        self.secret.is_none() && self.config_map.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret.is_some() && self.config_map.is_some() {
            return Err(ValidationError::SecretAndConfigMap);
        }

        Ok(())
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{InhibitRule, Receiver, Route};

/// AlertmanagerConfigSpec is a specification of the desired behavior of the Alertmanager configuration.
/// By definition, the Alertmanager configuration only applies to alerts for which
/// the `namespace` label is equal to the namespace of the AlertmanagerConfig resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertmanagerConfigSpec {
    /// The Alertmanager route definition for alerts matching the resource's namespace.
    /// If present, it will be added to the generated Alertmanager configuration as a first-level route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,

    /// List of receivers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub receivers: Vec<Receiver>,

    /// List of inhibition rules. The rules will only apply to alerts matching the resource's namespace.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inhibit_rules: Vec<InhibitRule>,
}

impl AlertmanagerConfigSpec {
    pub fn receiver(&self, name: &str) -> Option<&Receiver> {
        self.receivers.iter().find(|r| r.name == name)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_receivers()?;
        self.validate_route_references()
    }

    /// Receiver names must be unique, and every receiver must pass its own checks.
    pub fn validate_receivers(&self) -> Result<(), ValidationError> {
        let mut names = HashSet::new();

        for receiver in &self.receivers {
            if !names.insert(receiver.name.as_str()) {
                return Err(ValidationError::DuplicateReceiver(receiver.name.clone()));
            }
        }

        for receiver in &self.receivers {
            receiver
                .validate()
                .map_err(|reason| ValidationError::Receiver {
                    name: receiver.name.clone(),
                    reason: Box::new(reason),
                })?;
        }

        Ok(())
    }

    /// Every receiver named in the route tree has to be declared in `receivers`.
    pub fn validate_route_references(&self) -> Result<(), ValidationError> {
        let Some(route) = &self.route else {
            return Ok(());
        };

        for node in route {
            if !node.receiver.is_empty() && self.receiver(&node.receiver).is_none() {
                return Err(ValidationError::UndefinedReceiver(node.receiver.clone()));
            }
        }

        Ok(())
    }
}

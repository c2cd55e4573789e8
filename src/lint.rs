use std::fmt;

use kube::ResourceExt as _;

use crate::{
    config::LintConfig,
    error::ValidationError,
    kube::apis::monitoring::v1alpha1::AlertmanagerConfig,
    logger,
};

/// Verdict for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintEntry {
    pub namespace: Option<String>,
    pub name: String,
    pub result: Result<(), ValidationError>,
}

impl LintEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    fn object_ref(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}/{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for LintEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "OK {}", self.object_ref()),
            Err(err) => write!(f, "NG {}: {}", self.object_ref(), err),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LintReport {
    entries: Vec<LintEntry>,
}

impl LintReport {
    pub fn entries(&self) -> &[LintEntry] {
        &self.entries
    }

    pub fn is_ok(&self) -> bool {
        self.entries.iter().all(LintEntry::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &LintEntry> {
        self.entries.iter().filter(|entry| !entry.is_ok())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, resource: &AlertmanagerConfig) -> Result<(), ValidationError> {
        resource.spec.validate_receivers()?;

        if self.config.check_receiver_references {
            resource.spec.validate_route_references()?;
        }

        Ok(())
    }

    /// Every resource is checked on its own; a failure does not stop the others.
    pub fn lint(&self, resources: &[AlertmanagerConfig]) -> LintReport {
        let entries = resources
            .iter()
            .map(|resource| {
                let entry = LintEntry {
                    namespace: resource.namespace(),
                    name: resource.name_any(),
                    result: self.check(resource),
                };

                match &entry.result {
                    Ok(()) => logger!(debug, "{} is valid", entry.object_ref()),
                    Err(err) => logger!(info, "{} is invalid: {}", entry.object_ref(), err),
                }

                entry
            })
            .collect();

        LintReport { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::document::parse_documents;

    fn resources() -> Vec<AlertmanagerConfig> {
        let data = indoc! {r#"
            metadata:
              name: valid
              namespace: ns
            spec:
              route:
                receiver: webhook
              receivers:
                - name: webhook
                  webhookConfigs:
                    - url: http://webhook
            ---
            metadata:
              name: undefined-receiver
              namespace: ns
            spec:
              route:
                receiver: missing
            ---
            metadata:
              name: bad-responder
            spec:
              receivers:
                - name: opsgenie
                  opsgenieConfigs:
                    - responders:
                        - name: oncall
                          type: manager
        "#};

        parse_documents(data).unwrap()
    }

    #[test]
    fn lint_visits_every_resource() {
        let report = Linter::default().lint(&resources());

        let actual: Vec<String> = report.entries().iter().map(ToString::to_string).collect();

        assert_eq!(
            actual,
            vec![
                "OK ns/valid".to_string(),
                r#"NG ns/undefined-receiver: route references undefined receiver "missing""#
                    .to_string(),
                r#"NG bad-responder: receiver "opsgenie": responder type should match team, user, escalation or schedule"#
                    .to_string(),
            ]
        );
        assert!(!report.is_ok());
        assert_eq!(report.failures().count(), 2);
    }

    #[test]
    fn receiver_reference_check_can_be_disabled() {
        let linter = Linter::new(LintConfig {
            check_receiver_references: false,
        });

        let report = linter.lint(&resources());

        assert_eq!(
            report
                .failures()
                .map(|entry| entry.name.as_str())
                .collect::<Vec<_>>(),
            vec!["bad-responder"]
        );
    }

    #[test]
    fn empty_input_is_ok() {
        let report = Linter::default().lint(&[]);

        assert!(report.is_ok());
        assert!(report.entries().is_empty());
    }
}

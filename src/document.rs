//! Reading AlertmanagerConfig resources out of YAML/JSON manifests.

use std::{fs, path::Path};

use serde::Deserialize as _;
use serde_yaml::Value;

use crate::{
    error::DocumentError,
    kube::apis::monitoring::v1alpha1::{
        AlertmanagerConfig, AlertmanagerConfigList, ALERTMANAGER_CONFIG_KIND,
        ALERTMANAGER_CONFIG_LIST_KIND,
    },
    logger,
};

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<AlertmanagerConfig>, DocumentError> {
    let path = path.as_ref();

    let input = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let resources = parse_documents(&input).map_err(|err| err.with_path(path))?;

    logger!(
        debug,
        "loaded {} resource(s) from {}",
        resources.len(),
        path.display()
    );

    Ok(resources)
}

/// Parses a `---` separated stream. JSON input is accepted as a single YAML document.
///
/// A document without `kind` is read as a single AlertmanagerConfig, a list document
/// contributes all of its items, and empty documents are skipped.
pub fn parse_documents(input: &str) -> Result<Vec<AlertmanagerConfig>, DocumentError> {
    let mut resources = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(input).enumerate() {
        let value = Value::deserialize(document).map_err(parse_error(index))?;

        if value.is_null() {
            continue;
        }

        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or(ALERTMANAGER_CONFIG_KIND)
            .to_string();

        if kind == ALERTMANAGER_CONFIG_KIND {
            let resource: AlertmanagerConfig =
                serde_yaml::from_value(value).map_err(parse_error(index))?;

            resources.push(resource);
        } else if kind == ALERTMANAGER_CONFIG_LIST_KIND {
            let list: AlertmanagerConfigList =
                serde_yaml::from_value(value).map_err(parse_error(index))?;

            resources.extend(list.items);
        } else {
            return Err(DocumentError::UnsupportedKind {
                path: None,
                index,
                kind,
            });
        }
    }

    Ok(resources)
}

fn parse_error(index: usize) -> impl FnOnce(serde_yaml::Error) -> DocumentError {
    move |source| DocumentError::Parse {
        path: None,
        index,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use kube::ResourceExt as _;
    use pretty_assertions::assert_eq;

    fn names(resources: &[AlertmanagerConfig]) -> Vec<String> {
        resources.iter().map(|r| r.name_any()).collect()
    }

    #[test]
    fn multiple_documents() {
        let data = indoc! {r#"
            apiVersion: monitoring.coreos.com/v1alpha1
            kind: AlertmanagerConfig
            metadata:
              name: first
            ---
            ---
            apiVersion: monitoring.coreos.com/v1alpha1
            kind: AlertmanagerConfigList
            items:
              - metadata:
                  name: second
              - metadata:
                  name: third
            ---
            metadata:
              name: fourth
        "#};

        let actual = parse_documents(data).unwrap();

        assert_eq!(names(&actual), vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn json_document() {
        let data = r#"{"apiVersion":"monitoring.coreos.com/v1alpha1","kind":"AlertmanagerConfig","metadata":{"name":"json"},"spec":{"receivers":[{"name":"null"}]}}"#;

        let actual = parse_documents(data).unwrap();

        assert_eq!(names(&actual), vec!["json"]);
        assert_eq!(actual[0].spec.receivers[0].name, "null");
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_documents("").unwrap(), vec![]);
    }

    #[test]
    fn unsupported_kind() {
        let data = indoc! {r#"
            metadata:
              name: first
            ---
            apiVersion: v1
            kind: ConfigMap
            metadata:
              name: second
        "#};

        let actual = parse_documents(data).unwrap_err();

        assert_eq!(actual.to_string(), r#"document 1: unsupported kind "ConfigMap""#);
    }

    #[test]
    fn malformed_document_reports_index() {
        let data = indoc! {r#"
            metadata:
              name: first
            ---
            spec:
              receivers: "not a list"
        "#};

        let actual = parse_documents(data).unwrap_err();

        assert!(matches!(actual, DocumentError::Parse { index: 1, .. }));
    }

    #[test]
    fn missing_file() {
        let actual = load_file("/nonexistent/amconfig/config.yaml").unwrap_err();

        match actual {
            DocumentError::Read { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/amconfig/config.yaml"))
            }
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn load_file_names_the_file_in_errors() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test/fixtures/malformed.yaml");

        let actual = load_file(path).unwrap_err();

        assert!(matches!(
            &actual,
            DocumentError::Parse { path: Some(p), index: 1, .. } if p == Path::new(path)
        ));
        assert_eq!(
            actual.to_string(),
            format!("{}: failed to parse document 1", path)
        );
    }

    #[test]
    fn load_fixture() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test/fixtures/valid.yaml");

        let actual = load_file(path).unwrap();

        assert_eq!(names(&actual), vec!["team-a", "team-b"]);
    }
}

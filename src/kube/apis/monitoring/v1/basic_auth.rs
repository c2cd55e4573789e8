use serde::{Deserialize, Serialize};

use crate::kube::apis::SecretKeySelector;

/// BasicAuth allows an endpoint to authenticate over basic authentication.
/// Both credentials are references into a secret in the resource's namespace.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BasicAuth {
    /// The secret key that contains the username for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<SecretKeySelector>,

    /// The secret key that contains the password for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretKeySelector>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_basic_auth() {
        let data = indoc! {r#"
            username:
              name: credentials
              key: user
            password:
              name: credentials
              key: pass
        "#};

        let actual: BasicAuth = serde_yaml::from_str(data).unwrap();

        let username = actual.username.unwrap();
        let password = actual.password.unwrap();

        assert_eq!(username.key, "user");
        assert_eq!(password.key, "pass");
        assert_eq!(username.name, password.name);
    }

    #[test]
    fn missing_credentials_are_unset() {
        let actual: BasicAuth = serde_yaml::from_str("{}").unwrap();

        assert_eq!(actual, BasicAuth::default());
        assert!(actual.password.is_none());
    }

    #[test]
    fn unset_credential_is_omitted() {
        let data = indoc! {r#"
            username:
              name: credentials
              key: user
        "#};

        let actual: BasicAuth = serde_yaml::from_str(data).unwrap();

        assert_eq!(
            serde_json::to_string(&actual).unwrap(),
            r#"{"username":{"key":"user","name":"credentials"}}"#
        );
    }
}

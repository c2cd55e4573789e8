use serde::{Deserialize, Serialize};

use super::Matcher;

/// Route defines a node in the routing tree.
///
/// Durations are kept as the strings found in the document (e.g. `30s`, `5m`); they are
/// interpreted by the component that renders the final Alertmanager configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Route {
    /// Name of the receiver for this route. If present, it should be listed in the `receivers` field.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub receiver: String,

    /// List of labels to group by.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,

    /// How long to wait before sending the initial notification.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_wait: String,

    /// How long to wait before sending an updated notification.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_interval: String,

    /// How long to wait before repeating the last notification.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repeat_interval: String,

    /// List of matchers that the alert's labels should match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matchers: Vec<Matcher>,

    /// Boolean indicating whether an alert should continue matching subsequent sibling nodes.
    #[serde(rename = "continue", skip_serializing_if = "std::ops::Not::not")]
    pub continue_: bool,

    /// Child routes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
}

impl Route {
    /// Walks the tree depth first, visiting each node before its children.
    pub fn iter(&self) -> RouteIter<'_> {
        RouteIter { stack: vec![self] }
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Route;
    type IntoIter = RouteIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RouteIter<'a> {
    stack: Vec<&'a Route>,
}

impl<'a> Iterator for RouteIter<'a> {
    type Item = &'a Route;

    fn next(&mut self) -> Option<Self::Item> {
        let route = self.stack.pop()?;

        self.stack.extend(route.routes.iter().rev());

        Some(route)
    }
}

pub use anyhow::{anyhow, Result};

use std::path::{Path, PathBuf};

use thiserror::Error as TError;

/// A single violated constraint. Validators stop at the first one they find.
#[derive(Debug, Clone, PartialEq, Eq, TError)]
pub enum ValidationError {
    #[error("missing type in Slack action configuration")]
    SlackActionMissingType,
    #[error("missing text in Slack action configuration")]
    SlackActionMissingText,
    #[error("missing name or url in Slack action configuration")]
    SlackActionMissingNameOrUrl,
    #[error("missing text in Slack confirmation configuration")]
    SlackConfirmationMissingText,
    #[error("missing title in Slack field configuration")]
    SlackFieldMissingTitle,
    #[error("missing value in Slack field configuration")]
    SlackFieldMissingValue,

    #[error("responder must have at least an ID, a Name or an Username defined")]
    OpsGenieResponderMissingIdentity,
    #[error("responder type should match team, user, escalation or schedule")]
    OpsGenieResponderType,

    #[error("cannot specify both Secret and ConfigMap")]
    SecretAndConfigMap,
    #[error("client cert specified without client key")]
    ClientCertWithoutKey,
    #[error("client key specified without client cert")]
    ClientKeyWithoutCert,

    #[error("duplicate receiver name {0:?}")]
    DuplicateReceiver(String),
    #[error("receiver {name:?}: {reason}")]
    Receiver {
        name: String,
        reason: Box<ValidationError>,
    },
    #[error("route references undefined receiver {0:?}")]
    UndefinedReceiver(String),
}

#[derive(Debug, TError)]
pub enum DocumentError {
    #[error("{}: failed to read file", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}failed to parse document {index}", location(path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        index: usize,
        source: serde_yaml::Error,
    },
    #[error("{}document {index}: unsupported kind {kind:?}", location(path.as_deref()))]
    UnsupportedKind {
        path: Option<PathBuf>,
        index: usize,
        kind: String,
    },
}

impl DocumentError {
    /// Attaches the file the documents were read from.
    pub fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Parse { index, source, .. } => Self::Parse {
                path: Some(file.to_path_buf()),
                index,
                source,
            },
            Self::UnsupportedKind { index, kind, .. } => Self::UnsupportedKind {
                path: Some(file.to_path_buf()),
                index,
                kind,
            },
            err @ Self::Read { .. } => err,
        }
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|path| format!("{}: ", path.display()))
        .unwrap_or_default()
}

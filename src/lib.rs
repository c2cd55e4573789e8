pub mod cmd;
pub mod config;
pub mod document;
pub mod error;
pub mod kube;
pub mod lint;
pub mod logging;

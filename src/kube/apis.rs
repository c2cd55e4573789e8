pub mod monitoring;

pub use k8s_openapi::{
    api::core::v1::{ConfigMapKeySelector, SecretKeySelector},
    apimachinery, List, ListableResource, Metadata, NamespaceResourceScope, Resource,
};

pub mod v1;
pub mod v1alpha1;

/// API group shared by every monitoring.coreos.com resource.
pub const GROUP: &str = "monitoring.coreos.com";

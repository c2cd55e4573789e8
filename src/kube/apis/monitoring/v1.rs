//! Types owned by `monitoring.coreos.com/v1` that the alpha resources embed.

mod basic_auth;
pub use self::basic_auth::BasicAuth;

mod safe_tls_config;
pub use self::safe_tls_config::SafeTLSConfig;

mod secret_or_config_map;
pub use self::secret_or_config_map::SecretOrConfigMap;

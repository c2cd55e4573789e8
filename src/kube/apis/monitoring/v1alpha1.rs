//! `monitoring.coreos.com/v1alpha1`: the namespaced AlertmanagerConfig resource.

pub const VERSION: &str = "v1alpha1";

pub const ALERTMANAGER_CONFIG_KIND: &str = "AlertmanagerConfig";
pub const ALERTMANAGER_CONFIG_LIST_KIND: &str = "AlertmanagerConfigList";
pub const ALERTMANAGER_CONFIG_NAME: &str = "alertmanagerconfigs";
pub const ALERTMANAGER_CONFIG_KIND_KEY: &str = "alertmanagerconfig";

mod alertmanager_config;
pub use self::alertmanager_config::{AlertmanagerConfig, AlertmanagerConfigList};

mod alertmanager_config_spec;
pub use self::alertmanager_config_spec::AlertmanagerConfigSpec;

mod http_config;
pub use self::http_config::HTTPConfig;

mod inhibit_rule;
pub use self::inhibit_rule::InhibitRule;

mod matcher;
pub use self::matcher::Matcher;

mod opsgenie_config;
pub use self::opsgenie_config::{OpsGenieConfig, OpsGenieConfigDetail, OpsGenieConfigResponder};

mod pagerduty_config;
pub use self::pagerduty_config::{PagerDutyConfig, PagerDutyConfigDetail};

mod receiver;
pub use self::receiver::Receiver;

mod route;
pub use self::route::{Route, RouteIter};

mod slack_config;
pub use self::slack_config::{SlackAction, SlackConfig, SlackConfirmationField, SlackField};

mod webhook_config;
pub use self::webhook_config::WebhookConfig;

mod wechat_config;
pub use self::wechat_config::WeChatConfig;

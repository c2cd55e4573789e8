use std::any::Any;

use serde::{de, ser::SerializeStruct as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::ValidationError,
    kube::{
        apis::{
            apimachinery::pkg::apis::meta::v1::ObjectMeta, monitoring::GROUP, List,
            ListableResource, Metadata, NamespaceResourceScope, Resource,
        },
        RuntimeObject,
    },
};

use super::{
    AlertmanagerConfigSpec, ALERTMANAGER_CONFIG_KIND, ALERTMANAGER_CONFIG_LIST_KIND,
    ALERTMANAGER_CONFIG_NAME, VERSION,
};

/// AlertmanagerConfig defines a namespaced AlertmanagerConfig to be aggregated across multiple namespaces configuring one Alertmanager.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertmanagerConfig {
    /// Standard object's metadata. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#metadata
    pub metadata: ObjectMeta,

    pub spec: AlertmanagerConfigSpec,
}

/// AlertmanagerConfigList is a list of AlertmanagerConfig.
pub type AlertmanagerConfigList = List<AlertmanagerConfig>;

impl AlertmanagerConfig {
    pub fn new(name: &str, spec: AlertmanagerConfigSpec) -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.spec.validate()
    }
}

impl Resource for AlertmanagerConfig {
    const API_VERSION: &'static str = "monitoring.coreos.com/v1alpha1";
    const GROUP: &'static str = GROUP;
    const KIND: &'static str = ALERTMANAGER_CONFIG_KIND;
    const VERSION: &'static str = VERSION;
    const URL_PATH_SEGMENT: &'static str = ALERTMANAGER_CONFIG_NAME;
    type Scope = NamespaceResourceScope;
}

impl ListableResource for AlertmanagerConfig {
    const LIST_KIND: &'static str = ALERTMANAGER_CONFIG_LIST_KIND;
}

impl Metadata for AlertmanagerConfig {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &<Self as Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut <Self as Metadata>::Ty {
        &mut self.metadata
    }
}

impl RuntimeObject for AlertmanagerConfig {
    fn api_version(&self) -> &str {
        <Self as Resource>::API_VERSION
    }

    fn kind(&self) -> &str {
        <Self as Resource>::KIND
    }

    fn deep_copy_object(&self) -> Box<dyn RuntimeObject> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl RuntimeObject for AlertmanagerConfigList {
    fn api_version(&self) -> &str {
        <AlertmanagerConfig as Resource>::API_VERSION
    }

    fn kind(&self) -> &str {
        <AlertmanagerConfig as ListableResource>::LIST_KIND
    }

    fn deep_copy_object(&self) -> Box<dyn RuntimeObject> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<'de> Deserialize<'de> for AlertmanagerConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        enum Field {
            ApiVersion,
            Kind,
            Metadata,
            Spec,
            Other,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct Visitor;

                impl de::Visitor<'_> for Visitor {
                    type Value = Field;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.write_str("field identifier")
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        Ok(match v {
                            "apiVersion" => Field::ApiVersion,
                            "kind" => Field::Kind,
                            "metadata" => Field::Metadata,
                            "spec" => Field::Spec,
                            _ => Field::Other,
                        })
                    }
                }

                deserializer.deserialize_identifier(Visitor)
            }
        }

        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = AlertmanagerConfig;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self::Value as Resource>::KIND)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut value_metadata: Option<ObjectMeta> = None;
                let mut value_spec: Option<AlertmanagerConfigSpec> = None;

                while let Some(key) = map.next_key::<Field>()? {
                    match key {
                        Field::ApiVersion => {
                            let value: String = map.next_value()?;
                            if value != <Self::Value as Resource>::API_VERSION {
                                return Err(de::Error::invalid_value(
                                    de::Unexpected::Str(&value),
                                    &<Self::Value as Resource>::API_VERSION,
                                ));
                            }
                        }
                        Field::Kind => {
                            let value: String = map.next_value()?;
                            if value != <Self::Value as Resource>::KIND {
                                return Err(de::Error::invalid_value(
                                    de::Unexpected::Str(&value),
                                    &<Self::Value as Resource>::KIND,
                                ));
                            }
                        }
                        Field::Metadata => value_metadata = map.next_value()?,
                        Field::Spec => value_spec = map.next_value()?,
                        Field::Other => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(AlertmanagerConfig {
                    metadata: value_metadata.unwrap_or_default(),
                    spec: value_spec.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_struct(
            <Self as Resource>::KIND,
            &["apiVersion", "kind", "metadata", "spec"],
            Visitor,
        )
    }
}

impl Serialize for AlertmanagerConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct(<Self as Resource>::KIND, 4)?;
        state.serialize_field("apiVersion", <Self as Resource>::API_VERSION)?;
        state.serialize_field("kind", <Self as Resource>::KIND)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("spec", &self.spec)?;
        state.end()
    }
}

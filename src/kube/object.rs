use std::{any::Any, fmt::Debug};

/// An API object that can hand out an independent copy of itself.
///
/// Every implementor owns its whole value tree, so the returned copy shares no
/// lists, maps or nested objects with the original.
pub trait RuntimeObject: Any + Debug + Send + Sync {
    fn api_version(&self) -> &str;

    fn kind(&self) -> &str;

    fn deep_copy_object(&self) -> Box<dyn RuntimeObject>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn RuntimeObject {
    pub fn downcast_ref<T: RuntimeObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl Clone for Box<dyn RuntimeObject> {
    fn clone(&self) -> Self {
        self.deep_copy_object()
    }
}

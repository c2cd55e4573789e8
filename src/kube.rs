pub mod apis;
mod object;

pub use object::RuntimeObject;

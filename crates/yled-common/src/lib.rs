pub mod errors;
pub mod id;
pub mod kwargs;

pub use errors::{ConfigError, StyleError, ValidationError, YledError};
pub use id::{new_scope_key, ScopeKey};
pub use kwargs::{css_text, kwargs_from, Kwargs};

pub type Result<T> = std::result::Result<T, YledError>;

pub mod endpoint;
pub mod parameter;

pub use endpoint::{Endpoint, Request};
pub use parameter::{Parameter, to_openapi_data_type};

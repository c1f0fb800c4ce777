mod client;
mod schema;
mod transforms;

pub use client::ApiClient;
pub use schema::ResourceKind;
pub use transforms::{get_component_id, guid_by_path_and_name, ComponentPath};

pub mod errors;
pub mod client;
pub mod pickup_point_validate;

pub use client::{ReqwestClient, WebRequestClient};
pub use pickup_point_validate::*;

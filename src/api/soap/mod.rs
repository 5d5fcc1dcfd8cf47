pub mod response;

pub use response::BaseResponse;

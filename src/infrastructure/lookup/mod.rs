//! HTTP clients for the user and course services

mod course_client;
mod http_client;
mod user_client;

pub use course_client::HttpCourseClient;
pub use http_client::{LookupConfig, LookupHttpClient};
pub use user_client::HttpUserClient;

#[cfg(test)]
pub(crate) mod mock;
pub mod reqwest_transport;
pub mod traits;

pub use reqwest_transport::ReqwestTransport;
pub use traits::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartFile, RequestBody};

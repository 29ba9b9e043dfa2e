mod http;
mod transport;
mod user_record;
mod user_service;

pub use http::HttpTransport;
pub use transport::{Transport, TransportResponse};
pub use user_record::UserRecord;
pub use user_service::UserService;

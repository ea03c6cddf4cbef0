pub mod html;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

// Normal HTML response
pub use html::html_response;

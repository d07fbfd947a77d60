pub mod api_response;
pub mod status_badge;
pub mod text;

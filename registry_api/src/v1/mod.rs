mod api_models;
mod db;
mod error;
mod extractors;
mod handlers;
mod router;

pub use handlers::objects::download_object;
pub use router::router;

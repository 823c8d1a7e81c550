use crate::state::AppState;
use crate::v1::handlers::factories::{
    create_factory, delete_factory, get_factory, list_factories, update_factory,
};
use crate::v1::handlers::networks::{
    create_network, delete_network, get_network, list_networks, update_network,
};
use crate::v1::handlers::objects::request_upload;
use axum::Router;
use axum::routing::{get, post};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/factories", get(list_factories).post(create_factory))
        .route(
            "/factories/{id}",
            get(get_factory).put(update_factory).delete(delete_factory),
        )
        .route("/networks", get(list_networks).post(create_network))
        .route(
            "/networks/{id}",
            get(get_network).put(update_network).delete(delete_network),
        )
        .route("/objects/upload", post(request_upload))
}

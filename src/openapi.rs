//! OpenAPI document for the item routes, served at `/openapi.json`.

use crate::error::ErrorBody;
use crate::handlers::items;
use crate::model::{Item, NewItem};
use crate::response::Message;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        items::create,
        items::list,
        items::read,
        items::update,
        items::delete,
        items::search
    ),
    components(schemas(Item, NewItem, Message, ErrorBody)),
    tags((name = "items", description = "Item CRUD and search"))
)]
pub struct ApiDoc;

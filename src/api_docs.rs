use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::search::search_books,
        api::lookup::lookup_book,
        api::books::list_books,
        api::books::get_book,
        api::shelf::list_shelf,
        api::shelf::add_to_shelf,
        api::shelf::remove_from_shelf,
    ),
    components(
        schemas(api::shelf::AddToShelfRequest)
    ),
    tags(
        (name = "librarium", description = "Librarium book catalog API")
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RestaurantDoc { pub id: i32, pub name: String, pub address: String }

#[derive(ToSchema)]
pub struct PizzaDoc { pub id: i32, pub name: String, pub ingredients: String }

/// Entry of `restaurant_pizzas`; `restaurant` is present only on the
/// standalone view returned by `POST /restaurant_pizzas`.
#[derive(ToSchema)]
pub struct RestaurantPizzaDoc {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaDoc,
    pub restaurant: Option<RestaurantDoc>,
}

#[derive(ToSchema)]
pub struct RestaurantDetailDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaDoc>,
}

#[derive(ToSchema)]
pub struct CreateRestaurantPizzaDoc {
    /// 1..=30
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct ValidationErrorDoc { pub errors: Vec<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::get,
        crate::routes::restaurants::delete,
        crate::routes::pizzas::list,
        crate::routes::restaurant_pizzas::create,
    ),
    components(
        schemas(
            HealthResponse,
            RestaurantDoc,
            PizzaDoc,
            RestaurantPizzaDoc,
            RestaurantDetailDoc,
            CreateRestaurantPizzaDoc,
            ErrorDoc,
            ValidationErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/restaurants", "/restaurants/{id}", "/pizzas", "/restaurant_pizzas"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}

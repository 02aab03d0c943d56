//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, dashboard, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LibSys API",
        version = "1.0.0",
        description = "Library Management Admin REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Dashboard
        dashboard::get_stats,
        dashboard::list_overdue,
        dashboard::list_admins,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            users::InsertAcknowledgment,
            users::DeleteAcknowledgment,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::enums::Availability,
            // Dashboard
            crate::models::borrowed_book::BorrowedBook,
            crate::models::admin::Admin,
            crate::models::enums::AdminStatus,
            crate::services::dashboard::DashboardStats,
            // Shared
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management"),
        (name = "books", description = "Book management"),
        (name = "dashboard", description = "Dashboard aggregates")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, authors, books, customers, employees, managers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.3.0",
        description = "Library Management REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        // Admin
        admin::health_check,
        // Books & circulation
        books::check_out_book,
        books::return_book,
        books::add_book,
        books::get_book,
        books::search_books,
        books::update_book,
        books::delete_book,
        // Authors
        authors::add_author,
        authors::get_author,
        authors::search_authors,
        authors::update_author,
        authors::delete_author,
        // Customers
        customers::add_customer,
        customers::get_customer,
        customers::search_customers,
        customers::update_customer,
        customers::delete_customer,
        // Employees
        employees::login,
        employees::add_employee,
        employees::get_employee,
        employees::search_employees,
        employees::update_employee,
        employees::delete_employee,
        // Managers
        managers::add_manager,
        managers::get_manager,
        managers::search_managers,
        managers::update_manager,
        managers::delete_manager,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::CirculationRequest,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            authors::DeleteAuthorResponse,
            // Customers
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            crate::models::customer::UpdateCustomer,
            // Staff
            crate::models::staff::Employee,
            crate::models::staff::Manager,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            crate::models::staff::StaffRole,
            employees::LoginRequest,
            employees::LoginResponse,
            // Admin
            admin::HealthResponse,
            // Common
            super::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "admin", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and checkout/return"),
        (name = "authors", description = "Author management"),
        (name = "customers", description = "Customer management"),
        (name = "employees", description = "Employee management and login"),
        (name = "managers", description = "Manager management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

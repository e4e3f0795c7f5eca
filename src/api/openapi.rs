//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, authors, books, branches, health, members, publishers, schedules, staff, transactions,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library Branch Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Authors
        authors::list_authors,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Publishers
        publishers::list_publishers,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Branches
        branches::list_branches,
        branches::get_branch,
        branches::create_branch,
        branches::update_branch,
        branches::delete_branch,
        // Staff
        staff::list_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        // Members
        members::list_members,
        members::create_member,
        members::update_member,
        members::delete_member,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Schedules
        schedules::list_schedules,
        schedules::create_schedule,
        schedules::delete_schedule,
        // Transactions
        transactions::list_transactions,
        transactions::create_transaction,
        transactions::create_transaction_item,
        transactions::list_transaction_items,
        transactions::update_transaction,
        transactions::delete_transaction,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginData,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Publishers
            crate::models::publisher::Publisher,
            crate::models::publisher::CreatePublisher,
            crate::models::publisher::UpdatePublisher,
            // Branches
            crate::models::branch::Branch,
            crate::models::branch::BranchDetail,
            crate::models::branch::CreateBranch,
            crate::models::branch::UpdateBranch,
            // Staff
            crate::models::staff::Staff,
            crate::models::staff::StaffRole,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            // Members
            crate::models::member::Member,
            crate::models::member::MemberStatus,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Schedules
            crate::models::schedule::Schedule,
            crate::models::schedule::ScheduleDay,
            crate::models::schedule::CreateSchedule,
            // Transactions
            crate::models::transaction::Transaction,
            crate::models::transaction::TransactionStatus,
            crate::models::transaction::TransactionItem,
            crate::models::transaction::CreateTransaction,
            crate::models::transaction::UpdateTransaction,
            crate::models::transaction::CreateTransactionItem,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "authors", description = "Author management"),
        (name = "publishers", description = "Publisher management"),
        (name = "branches", description = "Branch management"),
        (name = "staff", description = "Staff management"),
        (name = "members", description = "Member management"),
        (name = "books", description = "Book catalog management"),
        (name = "schedules", description = "Staff schedule management"),
        (name = "transactions", description = "Borrow transaction management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

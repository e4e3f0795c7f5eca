//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod branches;
pub mod members;
pub mod publishers;
pub mod schedules;
pub mod staff;
pub mod transactions;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub publishers: publishers::PublishersRepository,
    pub branches: branches::BranchesRepository,
    pub staff: staff::StaffRepository,
    pub members: members::MembersRepository,
    pub books: books::BooksRepository,
    pub schedules: schedules::SchedulesRepository,
    pub transactions: transactions::TransactionsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            branches: branches::BranchesRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            schedules: schedules::SchedulesRepository::new(pool.clone()),
            transactions: transactions::TransactionsRepository::new(pool.clone()),
            pool,
        }
    }
}

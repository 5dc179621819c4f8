//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod circulation;
pub mod customers;
pub mod staff;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub authors: authors::AuthorsRepository,
    pub customers: customers::CustomersRepository,
    pub employees: staff::EmployeesRepository,
    pub managers: staff::ManagersRepository,
    pub circulation: circulation::CirculationRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            employees: staff::EmployeesRepository::new(pool.clone()),
            managers: staff::ManagersRepository::new(pool.clone()),
            circulation: circulation::CirculationRepository::new(pool.clone()),
            pool,
        }
    }
}

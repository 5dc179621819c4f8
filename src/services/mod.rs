//! Business logic services

pub mod authors;
pub mod books;
pub mod circulation;
pub mod customers;
pub mod staff;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub circulation: circulation::CirculationService,
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
    pub customers: customers::CustomersService,
    pub staff: staff::StaffService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            circulation: circulation::CirculationService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            customers: customers::CustomersService::new(repository.clone()),
            staff: staff::StaffService::new(repository, auth_config),
        }
    }
}

//! Employee/manager management and token issuance

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::staff::{
        CreateStaff, Employee, Manager, StaffClaims, StaffQuery, StaffRole, UpdateStaff,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
    config: AuthConfig,
}

impl StaffService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate an employee by username/password and issue a JWT.
    /// Unknown username and wrong password produce the same message.
    pub async fn login(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> AppResult<(Employee, String)> {
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                return Err(AppError::MissingField(
                    "Missing username or password".to_string(),
                ))
            }
        };

        let employee = self
            .repository
            .employees
            .get_by_username(&username)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Username or password incorrect".to_string())
            })?;

        if !verify_password(&employee.password, &password)? {
            return Err(AppError::Authentication(
                "Username or password incorrect".to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let claims = StaffClaims {
            sub: employee.username.clone(),
            staff_id: employee.id,
            role: StaffRole::Employee,
            exp: now + self.config.jwt_expiration_seconds as i64,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::info!(employee_id = employee.id, "employee logged in");
        Ok((employee, token))
    }

    /// Validate a bearer token and return its claims
    pub fn verify_token(&self, token: &str) -> AppResult<StaffClaims> {
        StaffClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|_| AppError::Authorization("Access forbidden".to_string()))
    }

    // Employees

    pub async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.repository.employees.get_by_id(id).await
    }

    pub async fn search_employees(
        &self,
        query: &StaffQuery,
    ) -> AppResult<(Vec<Employee>, i64)> {
        self.repository.employees.search(query).await
    }

    pub async fn create_employee(&self, staff: CreateStaff) -> AppResult<Employee> {
        staff.validate()?;

        if self.repository.employees.username_exists(&staff.username).await? {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let hash = hash_password(&staff.password)?;
        self.repository.employees.insert(&staff, &hash).await
    }

    pub async fn update_employee(&self, id: i32, staff: UpdateStaff) -> AppResult<Employee> {
        staff.validate()?;

        let hash = match &staff.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        self.repository
            .employees
            .update(id, &staff, hash.as_deref())
            .await
    }

    pub async fn delete_employee(&self, id: i32) -> AppResult<()> {
        self.repository.employees.delete(id).await
    }

    // Managers

    pub async fn get_manager(&self, id: i32) -> AppResult<Manager> {
        self.repository.managers.get_by_id(id).await
    }

    pub async fn search_managers(&self, query: &StaffQuery) -> AppResult<(Vec<Manager>, i64)> {
        self.repository.managers.search(query).await
    }

    pub async fn create_manager(&self, staff: CreateStaff) -> AppResult<Manager> {
        staff.validate()?;

        if self.repository.managers.username_exists(&staff.username).await? {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let hash = hash_password(&staff.password)?;
        self.repository.managers.insert(&staff, &hash).await
    }

    pub async fn update_manager(&self, id: i32, staff: UpdateStaff) -> AppResult<Manager> {
        staff.validate()?;

        let hash = match &staff.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        self.repository
            .managers
            .update(id, &staff, hash.as_deref())
            .await
    }

    pub async fn delete_manager(&self, id: i32) -> AppResult<()> {
        self.repository.managers.delete(id).await
    }
}

/// Hash a password with argon2 and a fresh salt
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored argon2 hash
fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_the_password() {
        let hash = hash_password("open-sesame").unwrap();
        assert!(verify_password(&hash, "open-sesame").unwrap());
    }

    #[test]
    fn verify_rejects_a_wrong_password() {
        let hash = hash_password("open-sesame").unwrap();
        assert!(!verify_password(&hash, "close-sesame").unwrap());
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        assert!(verify_password("not-a-phc-string", "whatever").is_err());
    }
}

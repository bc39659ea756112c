use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::user::errors::UserError;

/// Inbound port: what the HTTP layer may ask of the user domain.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register an account from already-validated fields, hashing the
    /// password on the way in.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Another account holds the address
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - The insert failed
    async fn register_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Fetch an account by id.
    ///
    /// # Errors
    /// * `NotFound` - No such account
    /// * `DatabaseError` - The lookup failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Fetch an account by email. Login resolves credentials through this.
    ///
    /// # Errors
    /// * `NotFound` - No account holds the address
    /// * `DatabaseError` - The lookup failed
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Report whether an account with this id exists.
    ///
    /// # Errors
    /// * `DatabaseError` - The lookup failed
    async fn user_exists(&self, id: &UserId) -> Result<bool, UserError>;

    /// Report whether any account holds this email.
    ///
    /// # Errors
    /// * `DatabaseError` - The lookup failed
    async fn user_exists_by_email(&self, email: &str) -> Result<bool, UserError>;

    /// Apply a partial update. Absent fields keep their stored values and a
    /// provided password is re-hashed before it lands.
    ///
    /// # Errors
    /// * `NotFound` - No such account
    /// * `EmailAlreadyExists` - The new address is taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - The update failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete an account, returning what was removed.
    ///
    /// # Errors
    /// * `NotFound` - No such account
    /// * `DatabaseError` - The delete failed
    async fn delete_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Outbound port: the persistence the user domain needs.
///
/// `find_*` methods return `None` for absent rows; the service layer turns
/// that into `NotFound` where an operation demands a hit.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a row. Id and creation timestamp come from the database.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - The unique index on email rejected the row
    /// * `DatabaseError` - The insert failed
    async fn create(
        &self,
        name: UserName,
        email: EmailAddress,
        password_hash: String,
    ) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    async fn exists(&self, id: &UserId) -> Result<bool, UserError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError>;

    /// Write back a full entity.
    ///
    /// # Errors
    /// * `NotFound` - The row vanished between read and write
    /// * `EmailAlreadyExists` - The unique index on email rejected the write
    /// * `DatabaseError` - The update failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove a row, returning what was deleted.
    ///
    /// # Errors
    /// * `NotFound` - No such row
    /// * `DatabaseError` - The delete failed
    async fn delete(&self, id: &UserId) -> Result<User, UserError>;
}

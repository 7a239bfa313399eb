use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::TrackerError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub name: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, TrackerError> {
        self.repo.create(&input.email, &input.name).await
    }
}

// ── CheckUserExists ──────────────────────────────────────────────────────────

pub struct CheckUserExistsUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CheckUserExistsUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<bool, TrackerError> {
        self.repo.exists_by_email(email).await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<User, TrackerError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(TrackerError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub name: String,
    /// Replaces the stored avatar; `None` clears it.
    pub avatar: Option<String>,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, email: &str, input: UpdateUserInput) -> Result<User, TrackerError> {
        self.repo
            .update_profile(email, &input.name, input.avatar.as_deref())
            .await?
            .ok_or(TrackerError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Remove the account and every row that references it.
    pub async fn execute(&self, email: &str) -> Result<(), TrackerError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(TrackerError::UserNotFound)?;

        // A concurrent delete may win between lookup and teardown.
        if !self.repo.delete_with_dependents(user.id).await? {
            return Err(TrackerError::UserNotFound);
        }
        tracing::info!(user_id = %user.id, "user deleted");
        Ok(())
    }
}

use crate::client::BarbershopClient;
use crate::error::{ApiError, ApiResult, ValidationError};
use crate::models::{User, UserPayload};
use crate::transport::Transport;

/// Username and password typed into the profile form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::new("Username is required"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::new("Password is required"));
        }
        Ok(())
    }
}

impl<T: Transport> BarbershopClient<T> {
    /// Find an existing user matching the credentials. Never creates one.
    ///
    /// The backend has no authentication endpoint, so the match is made
    /// against the user listing.
    pub async fn log_in(&self, credentials: &Credentials) -> ApiResult<User> {
        credentials.validate()?;
        let username = credentials.username.trim();
        let users = self.list::<User>().await?;
        users
            .records
            .into_iter()
            .find(|user| {
                user.username == username
                    && user.password.as_deref() == Some(credentials.password.as_str())
            })
            .ok_or_else(|| ApiError::InvalidInput("Invalid username or password".to_string()))
    }

    /// Create a new user, refusing usernames that are already taken
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<User> {
        credentials.validate()?;
        let username = credentials.username.trim();
        let users = self.list::<User>().await?;
        if users.records.iter().any(|user| user.username == username) {
            return Err(ApiError::InvalidInput(format!(
                "Username '{}' is already taken",
                username
            )));
        }
        let payload = UserPayload {
            username: username.to_string(),
            password: Some(credentials.password.clone()),
        };
        self.create(&payload).await
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::model::dealer::{DealerSummary, COUNTRY_ALL};
use crate::repository::dealer_repo::DealerRepository;
use crate::repository::settings_repo::{SettingsRepository, ADMIN_PASSWORD_HASH};
use crate::util::error::ServiceError;
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

/// Static portal gate: which dealer countries each portal language admits.
/// A dealer with country `All` passes every gate.
pub fn allowed_countries(lang: &str) -> &'static [&'static str] {
    match lang {
        "pt" => &["Brazil"],
        "en" => &["USA", "Australia"],
        "es" => &["Spain"],
        _ => &[],
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn dealer_login(
        &self,
        email: &str,
        password: &str,
        lang: &str,
    ) -> Result<DealerSummary, ServiceError>;
    async fn admin_login(&self, password: &str) -> Result<(), ServiceError>;
    async fn change_admin_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ServiceError>;
    /// Store the bootstrap admin password hash unless one already exists.
    /// Returns true when a new hash was written.
    async fn seed_admin_password(&self, password: &str) -> Result<bool, ServiceError>;
}

pub struct AuthServiceImpl {
    pub dealer_repo: Arc<dyn DealerRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
}

impl AuthServiceImpl {
    pub fn new(
        dealer_repo: Arc<dyn DealerRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            dealer_repo,
            settings_repo,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[instrument(skip(self, password), fields(email = %email, lang = %lang))]
    async fn dealer_login(
        &self,
        email: &str,
        password: &str,
        lang: &str,
    ) -> Result<DealerSummary, ServiceError> {
        info!("Dealer login attempt");

        let dealer = self
            .dealer_repo
            .find_by_email(email)
            .await
            .map_err(ServiceError::from)?
            .ok_or_else(|| {
                warn!("No dealer found for login email");
                ServiceError::Unauthorized("Invalid credentials".to_string())
            })?;

        let valid = PasswordUtilsImpl::verify_password(password, &dealer.password_hash)
            .unwrap_or(false);
        if !valid {
            warn!("Invalid password for dealer {}", dealer.id);
            return Err(ServiceError::Unauthorized("Invalid credentials".to_string()));
        }

        if dealer.country != COUNTRY_ALL
            && !allowed_countries(lang).contains(&dealer.country.as_str())
        {
            warn!(
                "Dealer {} (country {}) denied access to '{}' portal",
                dealer.id, dealer.country, lang
            );
            return Err(ServiceError::Forbidden(
                "Access to this portal is restricted for your account".to_string(),
            ));
        }

        info!("Dealer logged in successfully");
        Ok(DealerSummary::from(&dealer))
    }

    #[instrument(skip(self, password))]
    async fn admin_login(&self, password: &str) -> Result<(), ServiceError> {
        info!("Admin login attempt");
        let hash = self
            .settings_repo
            .get(ADMIN_PASSWORD_HASH)
            .await
            .map_err(ServiceError::from)?
            .ok_or_else(|| {
                error!("Admin password has not been initialized");
                ServiceError::InternalError("Admin password is not configured".to_string())
            })?;

        let valid = PasswordUtilsImpl::verify_password(password, &hash).unwrap_or(false);
        if !valid {
            warn!("Invalid admin password");
            return Err(ServiceError::Unauthorized("Invalid password".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, current_password, new_password))]
    async fn change_admin_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        self.admin_login(current_password).await?;

        let hash = PasswordUtilsImpl::hash_password(new_password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        self.settings_repo
            .set(ADMIN_PASSWORD_HASH, &hash)
            .await
            .map_err(ServiceError::from)?;
        info!("Admin password changed");
        Ok(())
    }

    async fn seed_admin_password(&self, password: &str) -> Result<bool, ServiceError> {
        if self
            .settings_repo
            .get(ADMIN_PASSWORD_HASH)
            .await
            .map_err(ServiceError::from)?
            .is_some()
        {
            return Ok(false);
        }
        let hash = PasswordUtilsImpl::hash_password(password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        self.settings_repo
            .set(ADMIN_PASSWORD_HASH, &hash)
            .await
            .map_err(ServiceError::from)?;
        Ok(true)
    }
}

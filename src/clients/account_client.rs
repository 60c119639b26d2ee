//! # Account Client
//!
//! Admin registration and the credential check behind the admin login.
use crate::account_actor::AccountError;
use crate::clients::actor_client::{recover_entity_error, ActorClient};
use crate::framework::{Filter, FrameworkError, ResourceClient};
use crate::model::{AccountCreate, AccountId, AdminAccount};
use async_trait::async_trait;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<AdminAccount>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<AdminAccount>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<AdminAccount> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<AdminAccount> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_entity_error(e, |e| AccountError::ActorCommunicationError(e.to_string()))
    }
}

impl AccountClient {
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: AccountCreate) -> Result<AccountId, AccountError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Plain credential comparison. Nothing is issued on success.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AccountId, AccountError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AccountError::ValidationError(
                "email and password are required".to_string(),
            ));
        }
        let (email, password) = (email.to_string(), password.to_string());
        let matched = self
            .inner
            .list(Filter::new(move |account: &AdminAccount| {
                account.verify(&email, &password)
            }))
            .await
            .map_err(Self::map_error)?;

        match matched.into_iter().next() {
            Some(account) => {
                info!(account_id = %account.id, "Admin logged in");
                Ok(account.id)
            }
            None => {
                warn!("Rejected admin login");
                Err(AccountError::InvalidCredentials)
            }
        }
    }
}

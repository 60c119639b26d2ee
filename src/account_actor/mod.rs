//! # Account Actor
//!
//! Holds the administrator accounts used by the admin login check. Accounts are
//! immutable once registered.

pub mod error;

pub use error::*;

use crate::framework::{ActorEntity, ResourceActor, ResourceClient};
use crate::model::{AccountCreate, AccountId, AdminAccount};
use std::convert::Infallible;

impl ActorEntity for AdminAccount {
    type Id = AccountId;
    type Create = AccountCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Error = AccountError;

    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, AccountError> {
        if params.email.trim().is_empty() || params.password.is_empty() {
            return Err(AccountError::ValidationError(
                "email and password are required".to_string(),
            ));
        }
        Ok(Self::new(id, params.email, params.password))
    }

    fn on_update(&mut self, update: Infallible) -> Result<(), AccountError> {
        match update {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), AccountError> {
        match action {}
    }
}

/// Creates a new account actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<AdminAccount>, ResourceClient<AdminAccount>) {
    ResourceActor::new(buffer_size)
}

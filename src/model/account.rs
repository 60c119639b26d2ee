use std::fmt::Display;

/// Opaque identifier for admin accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl From<u32> for AccountId {
    fn from(id: u32) -> Self {
        Self(format!("admin_{id}"))
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An administrator allowed into the fulfillment and menu views.
///
/// Credentials are compared as plain text and no session is issued.
#[derive(Clone, PartialEq)]
pub struct AdminAccount {
    pub id: AccountId,
    pub email: String,
    password: String,
}

// Keeps the password out of logs.
impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl AdminAccount {
    pub fn new(id: AccountId, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Payload for registering an admin account.
#[derive(Clone)]
pub struct AccountCreate {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AccountCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCreate")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

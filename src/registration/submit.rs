use tracing::{debug, info, warn};

use super::draft::{RegistrationDraft, RegistrationMode, Requirement};
use super::ports::{
    ApiError, Endpoint, KeyValueStore, Navigator, Notifier, RegistrationApi, StorageError,
    Viewport, STORAGE_FIRST_NAME, STORAGE_PAGE,
};
use crate::models::AppPage;

pub const EMAIL_SUCCESS_MESSAGE: &str =
    "Registration successful! Please confirm your email address, then sign in.";

/// What a successful submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// Email account created; the user was sent to the login page.
    EmailRegistered,
    /// OAuth profile completed; the user was sent to onboarding.
    ProfileCompleted,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please complete the required fields")]
    Incomplete(Vec<Requirement>),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The collaborators a registration screen talks to.
pub struct RegistrationScreen<'a> {
    pub storage: &'a dyn KeyValueStore,
    pub api: &'a dyn RegistrationApi,
    pub navigator: &'a dyn Navigator,
    pub notifier: &'a dyn Notifier,
    pub viewport: &'a dyn Viewport,
}

impl RegistrationScreen<'_> {
    /// First name saved by an earlier session, read once on mount.
    pub async fn saved_first_name(&self) -> Result<Option<String>, StorageError> {
        self.storage.get(STORAGE_FIRST_NAME).await
    }

    /// Gates the draft and posts it to the endpoint of its mode. Each call
    /// makes at most one request.
    pub async fn submit(&self, draft: &RegistrationDraft) -> Result<Submitted, SubmitError> {
        let missing = draft.missing_requirements();
        if !missing.is_empty() {
            debug!(?missing, "registration blocked");
            self.viewport.scroll_to_top();
            return Err(SubmitError::Incomplete(missing));
        }

        let body = draft.payload();
        match draft.mode {
            RegistrationMode::Email(_) => {
                self.api.post(Endpoint::Register, &body).await.inspect_err(|e| {
                    warn!(error = %e, "email registration failed");
                })?;
                info!("email registration accepted");
                self.notifier.show_transient_message(EMAIL_SUCCESS_MESSAGE);
                self.navigator.navigate_to(AppPage::Login);
                Ok(Submitted::EmailRegistered)
            }
            RegistrationMode::OAuthContinuation => {
                self.api.post(Endpoint::RegisterOauth, &body).await.inspect_err(|e| {
                    warn!(error = %e, "oauth registration failed");
                })?;
                info!("oauth registration accepted");
                let marker = AppPage::Onboarding.index().to_string();
                self.storage.set(STORAGE_PAGE, &marker).await?;
                self.navigator.navigate_to(AppPage::Onboarding);
                Ok(Submitted::ProfileCompleted)
            }
        }
    }
}

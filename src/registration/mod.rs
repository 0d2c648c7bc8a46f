//! Registration form state, validation and submission.
//!
//! Everything here is independent of the UI layer: the page wires signals to
//! a [`RegistrationDraft`] and hands a [`RegistrationScreen`] its
//! collaborators.

pub mod dob;
pub mod draft;
pub mod ports;
pub mod submit;
pub mod validation;

pub use dob::{DobBounds, DobPicker};
pub use draft::{EmailCredentials, RegistrationDraft, RegistrationMode, Requirement};
pub use ports::{
    ApiError, Endpoint, KeyValueStore, MemoryStore, Navigator, Notifier, RegistrationApi,
    StorageError, Viewport,
};
pub use submit::{RegistrationScreen, SubmitError, Submitted};
pub use validation::{is_email_valid, is_password_secure};

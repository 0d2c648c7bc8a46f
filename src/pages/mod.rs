mod login;
mod onboarding;
mod register;

pub use login::LoginPage;
pub use onboarding::OnboardingPage;
pub use register::{email_registration_href, RegisterPage, REGISTER_EMAIL_PARAM};

use chrono::NaiveDate;

use super::dob::default_date_of_birth;
use super::validation::{clamp_first_name, is_email_valid, is_password_secure};
use crate::models::{Gender, RegisterBody};

/// Credentials typed into the form in email-registration mode, stored next to
/// their derived validity flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailCredentials {
    pub email: String,
    pub email_valid: bool,
    pub password: String,
    pub password_secure: bool,
}

/// How the user reached the registration screen. Fixed for the lifetime of
/// the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationMode {
    Email(EmailCredentials),
    OAuthContinuation,
}

impl RegistrationMode {
    /// A non-empty `registerEmail` parameter selects email registration.
    pub fn from_param(register_email: Option<&str>) -> Self {
        match register_email {
            Some(flag) if !flag.is_empty() => RegistrationMode::Email(EmailCredentials::default()),
            _ => RegistrationMode::OAuthContinuation,
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(self, RegistrationMode::Email(_))
    }
}

/// Reasons a draft cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    PrivacyConsent,
    TermsConsent,
    FirstName,
    ValidEmail,
    SecurePassword,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Requirement::PrivacyConsent => "privacy policy not accepted",
            Requirement::TermsConsent => "terms of service not accepted",
            Requirement::FirstName => "first name missing",
            Requirement::ValidEmail => "email address invalid",
            Requirement::SecurePassword => "password not secure",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    pub mode: RegistrationMode,
    pub first_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub terms_accepted: bool,
    pub privacy_accepted: bool,
    pub referrer_code: String,
}

impl RegistrationDraft {
    pub fn new(mode: RegistrationMode, today: NaiveDate) -> Self {
        Self {
            mode,
            first_name: String::new(),
            date_of_birth: default_date_of_birth(today),
            gender: Gender::default(),
            terms_accepted: false,
            privacy_accepted: false,
            referrer_code: String::new(),
        }
    }

    pub fn credentials(&self) -> Option<&EmailCredentials> {
        match &self.mode {
            RegistrationMode::Email(creds) => Some(creds),
            RegistrationMode::OAuthContinuation => None,
        }
    }

    pub fn update_email(&mut self, text: String) {
        if let RegistrationMode::Email(creds) = &mut self.mode {
            creds.email_valid = is_email_valid(&text);
            creds.email = text;
        }
    }

    pub fn update_password(&mut self, text: String) {
        if let RegistrationMode::Email(creds) = &mut self.mode {
            creds.password_secure = is_password_secure(&text);
            creds.password = text;
        }
    }

    pub fn set_first_name(&mut self, text: &str) {
        self.first_name = clamp_first_name(text);
    }

    /// Applies a first name read back from storage on mount.
    pub fn restore_first_name(&mut self, saved: Option<String>) {
        self.first_name = saved.map(|name| clamp_first_name(&name)).unwrap_or_default();
    }

    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.date_of_birth = date;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn set_referrer_code(&mut self, code: String) {
        self.referrer_code = code;
    }

    pub fn toggle_terms(&mut self) {
        self.terms_accepted = !self.terms_accepted;
    }

    pub fn toggle_privacy(&mut self) {
        self.privacy_accepted = !self.privacy_accepted;
    }

    pub fn missing_requirements(&self) -> Vec<Requirement> {
        let mut missing = Vec::new();
        if !self.privacy_accepted {
            missing.push(Requirement::PrivacyConsent);
        }
        if !self.terms_accepted {
            missing.push(Requirement::TermsConsent);
        }
        if self.first_name.is_empty() {
            missing.push(Requirement::FirstName);
        }
        if let Some(creds) = self.credentials() {
            if !creds.email_valid {
                missing.push(Requirement::ValidEmail);
            }
            if !creds.password_secure {
                missing.push(Requirement::SecurePassword);
            }
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        self.missing_requirements().is_empty()
    }

    /// Request body for the endpoint matching the draft's mode.
    pub fn payload(&self) -> RegisterBody {
        let (email, password) = match self.credentials() {
            Some(creds) => (Some(creds.email.clone()), Some(creds.password.clone())),
            None => (None, None),
        };
        RegisterBody {
            date_of_birth: self.date_of_birth,
            first_name: self.first_name.clone(),
            gender: self.gender,
            privacy: self.privacy_accepted,
            terms_conditions: self.terms_accepted,
            referrer_code: self.referrer_code.clone(),
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn complete(mode: RegistrationMode) -> RegistrationDraft {
        let mut draft = RegistrationDraft::new(mode, today());
        draft.set_first_name("Ada");
        draft.toggle_terms();
        draft.toggle_privacy();
        draft
    }

    #[test]
    fn mode_follows_register_email_param() {
        assert!(RegistrationMode::from_param(Some("1")).is_email());
        assert!(RegistrationMode::from_param(Some("ada@example.com")).is_email());
        assert!(!RegistrationMode::from_param(Some("")).is_email());
        assert!(!RegistrationMode::from_param(None).is_email());
    }

    #[test]
    fn fresh_draft_defaults() {
        let draft = RegistrationDraft::new(RegistrationMode::OAuthContinuation, today());
        assert_eq!(draft.first_name, "");
        assert_eq!(draft.date_of_birth, NaiveDate::from_ymd_opt(2008, 10, 19).unwrap());
        assert_eq!(draft.gender, Gender::Male);
        assert!(!draft.terms_accepted && !draft.privacy_accepted);
        assert_eq!(draft.referrer_code, "");
    }

    #[test]
    fn validity_is_recomputed_per_keystroke() {
        let mut draft = RegistrationDraft::new(RegistrationMode::from_param(Some("1")), today());
        draft.update_email("ada@example.c".into());
        assert!(!draft.credentials().unwrap().email_valid);
        draft.update_email("ada@example.co".into());
        assert!(draft.credentials().unwrap().email_valid);

        draft.update_password("abc123".into());
        assert!(!draft.credentials().unwrap().password_secure);
        draft.update_password("abc1234".into());
        assert!(draft.credentials().unwrap().password_secure);
        draft.update_password("abcdefgh".into());
        assert!(!draft.credentials().unwrap().password_secure);
    }

    #[test]
    fn credential_updates_ignored_in_oauth_mode() {
        let mut draft = RegistrationDraft::new(RegistrationMode::OAuthContinuation, today());
        draft.update_email("ada@example.com".into());
        draft.update_password("abcd123".into());
        assert_eq!(draft.mode, RegistrationMode::OAuthContinuation);
    }

    #[test]
    fn toggles_flip_consent() {
        let mut draft = RegistrationDraft::new(RegistrationMode::OAuthContinuation, today());
        draft.toggle_terms();
        draft.toggle_privacy();
        draft.toggle_privacy();
        assert!(draft.terms_accepted);
        assert!(!draft.privacy_accepted);
    }

    #[test]
    fn restored_first_name() {
        let mut draft = RegistrationDraft::new(RegistrationMode::OAuthContinuation, today());
        draft.restore_first_name(Some("Grace".into()));
        assert_eq!(draft.first_name, "Grace");
        draft.restore_first_name(None);
        assert_eq!(draft.first_name, "");
    }

    #[test]
    fn gate_requires_both_consents_and_a_name() {
        let mut draft = complete(RegistrationMode::OAuthContinuation);
        assert!(draft.can_submit());

        draft.toggle_terms();
        assert_eq!(draft.missing_requirements(), vec![Requirement::TermsConsent]);
        draft.toggle_terms();

        draft.toggle_privacy();
        assert_eq!(draft.missing_requirements(), vec![Requirement::PrivacyConsent]);
        draft.toggle_privacy();

        draft.set_first_name("");
        assert_eq!(draft.missing_requirements(), vec![Requirement::FirstName]);
    }

    #[test]
    fn email_mode_gate_checks_credentials() {
        let mut draft = complete(RegistrationMode::from_param(Some("1")));
        assert_eq!(
            draft.missing_requirements(),
            vec![Requirement::ValidEmail, Requirement::SecurePassword]
        );
        draft.update_email("ada@example.com".into());
        assert_eq!(draft.missing_requirements(), vec![Requirement::SecurePassword]);
        draft.update_password("abcd123".into());
        assert!(draft.can_submit());
    }

    #[test]
    fn payload_depends_on_mode() {
        let mut draft = complete(RegistrationMode::from_param(Some("1")));
        draft.update_email("ada@example.com".into());
        draft.update_password("abcd123".into());
        draft.set_gender(Gender::Other);
        draft.set_referrer_code("c2f2-29be".into());

        let body = draft.payload();
        assert_eq!(body.email.as_deref(), Some("ada@example.com"));
        assert_eq!(body.password.as_deref(), Some("abcd123"));
        assert_eq!(body.gender, Gender::Other);
        assert_eq!(body.referrer_code, "c2f2-29be");
        assert!(body.privacy && body.terms_conditions);

        let oauth = complete(RegistrationMode::OAuthContinuation).payload();
        assert!(oauth.email.is_none());
        assert!(oauth.password.is_none());
        assert_eq!(oauth.first_name, "Ada");
    }
}

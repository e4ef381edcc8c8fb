//! Contact form data model and validation, plus the server-side relay client
//! that forwards submissions to the hosted email-delivery service.
//!
//! Validation runs on both sides of the wire: in the browser before any
//! request is issued, and again in the server function before relaying.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

// Loose international-or-10-digit shape, e.g. "+261 0340000000" or plain
// "0340000000".
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+\d{1,3}[- ]?)?\d{10}$").expect("phone pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Optional; an empty string means the sender chose not to provide one.
    pub whatsapp: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Your full name is required")]
    NameRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid WhatsApp number")]
    InvalidWhatsapp,
    #[error("Your message is important to me. Please share your thoughts.")]
    MessageRequired,
}

impl ContactRequest {
    /// Checks the rules in order; the first failing one wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.email.trim().is_empty() || !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.whatsapp.is_empty() && !PHONE_RE.is_match(&self.whatsapp) {
            return Err(ValidationError::InvalidWhatsapp);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MessageRequired);
        }
        Ok(())
    }
}

/// Lifecycle of one submission. The enum shape guarantees the form is never
/// simultaneously sending and failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

/// Prepended to relay failures before they are shown to the sender.
pub const SEND_ERROR_PREFIX: &str = "Error sending the message. Please try again. ";

/// Maps a relay outcome to the next form state. The boolean says whether the
/// draft fields should be cleared: only a successful send discards them, a
/// failure keeps them so the sender can retry without retyping.
pub fn settle_submission(outcome: Result<(), String>) -> (SubmissionStatus, bool) {
    match outcome {
        Ok(()) => (SubmissionStatus::Success, true),
        Err(err) => (
            SubmissionStatus::Error(format!("{SEND_ERROR_PREFIX}{err}")),
            false,
        ),
    }
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(feature = "ssr")]
pub mod relay {
    //! Outbound call to the email-delivery REST API. Credentials are
    //! environment-injected so they never reach the client bundle.

    use serde::Serialize;
    use thiserror::Error;

    use super::ContactRequest;

    const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

    #[derive(Error, Debug)]
    pub enum RelayError {
        #[error("mail relay is not configured: {0} is unset")]
        Unconfigured(&'static str),
        #[error("{0}")]
        Http(#[from] reqwest::Error),
        #[error("mail relay rejected the message ({status}): {body}")]
        Rejected { status: u16, body: String },
    }

    #[derive(Debug, Clone)]
    pub struct RelayConfig {
        pub service_id: String,
        pub template_id: String,
        pub public_key: String,
        /// Required by the provider for REST (non-browser) calls when strict
        /// mode is enabled on the account.
        pub private_key: Option<String>,
        pub recipient: String,
    }

    impl RelayConfig {
        pub fn from_env() -> Result<Self, RelayError> {
            fn required(name: &'static str) -> Result<String, RelayError> {
                std::env::var(name).map_err(|_| RelayError::Unconfigured(name))
            }
            Ok(Self {
                service_id: required("EMAILJS_SERVICE_ID")?,
                template_id: required("EMAILJS_TEMPLATE_ID")?,
                public_key: required("EMAILJS_PUBLIC_KEY")?,
                private_key: std::env::var("EMAILJS_PRIVATE_KEY").ok(),
                recipient: required("CONTACT_RECIPIENT")?,
            })
        }
    }

    #[derive(Serialize)]
    struct SendPayload<'a> {
        service_id: &'a str,
        template_id: &'a str,
        user_id: &'a str,
        #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
        access_token: Option<&'a str>,
        template_params: TemplateParams<'a>,
    }

    /// Field names follow the provider's mail template.
    #[derive(Serialize)]
    struct TemplateParams<'a> {
        from_name: &'a str,
        from_email: &'a str,
        #[serde(skip_serializing_if = "str::is_empty")]
        from_whatsapp: &'a str,
        message: &'a str,
        to_email: &'a str,
    }

    fn payload<'a>(config: &'a RelayConfig, request: &'a ContactRequest) -> SendPayload<'a> {
        SendPayload {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: TemplateParams {
                from_name: &request.name,
                from_email: &request.email,
                from_whatsapp: &request.whatsapp,
                message: &request.message,
                to_email: &config.recipient,
            },
        }
    }

    /// Issues exactly one request; the caller owns retry policy (there is
    /// none beyond the user resubmitting).
    pub async fn send(config: &RelayConfig, request: &ContactRequest) -> Result<(), RelayError> {
        let response = reqwest::Client::new()
            .post(SEND_ENDPOINT)
            .json(&payload(config, request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn test_config() -> RelayConfig {
            RelayConfig {
                service_id: "service_test".to_string(),
                template_id: "template_test".to_string(),
                public_key: "public_test".to_string(),
                private_key: None,
                recipient: "owner@example.com".to_string(),
            }
        }

        #[test]
        fn payload_maps_form_fields_to_template_params() {
            let request = ContactRequest {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                whatsapp: "+1 0123456789".to_string(),
                message: "Hello there".to_string(),
            };
            let value = serde_json::to_value(payload(&test_config(), &request))
                .expect("payload should serialize");

            assert_eq!(value["service_id"], "service_test");
            assert_eq!(value["template_id"], "template_test");
            assert_eq!(value["user_id"], "public_test");
            assert!(value.get("accessToken").is_none());

            let params = &value["template_params"];
            assert_eq!(params["from_name"], "Jane Doe");
            assert_eq!(params["from_email"], "jane@example.com");
            assert_eq!(params["from_whatsapp"], "+1 0123456789");
            assert_eq!(params["message"], "Hello there");
            assert_eq!(params["to_email"], "owner@example.com");
        }

        #[test]
        fn payload_omits_empty_whatsapp() {
            let request = ContactRequest {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                whatsapp: String::new(),
                message: "Hello".to_string(),
            };
            let value = serde_json::to_value(payload(&test_config(), &request))
                .expect("payload should serialize");
            assert!(value["template_params"].get("from_whatsapp").is_none());
        }

        #[test]
        fn payload_includes_private_key_when_configured() {
            let mut config = test_config();
            config.private_key = Some("secret".to_string());
            let request = ContactRequest {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                whatsapp: String::new(),
                message: "Hi".to_string(),
            };
            let value = serde_json::to_value(payload(&config, &request))
                .expect("payload should serialize");
            assert_eq!(value["accessToken"], "secret");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            whatsapp: String::new(),
            message: "Hello, I have a project in mind.".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn empty_name_is_first_failure() {
        let request = ContactRequest {
            name: "   ".to_string(),
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        // Name is checked before email, so its error wins.
        assert_eq!(request.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["not-an-email", "missing@tld", "spaces in@mail.com", ""] {
            let request = ContactRequest {
                email: email.to_string(),
                ..valid_request()
            };
            assert_eq!(
                request.validate(),
                Err(ValidationError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn plain_email_shape_is_accepted() {
        let request = ContactRequest {
            email: "someone@domain.tld".to_string(),
            ..valid_request()
        };
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn whatsapp_is_optional() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn whatsapp_accepts_ten_digits_and_international_prefix() {
        for number in ["0123456789", "+2610123456789", "+1-0123456789", "+33 0123456789"] {
            let request = ContactRequest {
                whatsapp: number.to_string(),
                ..valid_request()
            };
            assert_eq!(
                request.validate(),
                Ok(()),
                "expected {number:?} to be accepted"
            );
        }
    }

    #[test]
    fn whatsapp_rejects_short_or_alphabetic_numbers() {
        for number in ["12345", "phone-number", "+12 345"] {
            let request = ContactRequest {
                whatsapp: number.to_string(),
                ..valid_request()
            };
            assert_eq!(request.validate(), Err(ValidationError::InvalidWhatsapp));
        }
    }

    #[test]
    fn empty_message_is_rejected() {
        let request = ContactRequest {
            message: " \n ".to_string(),
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(ValidationError::MessageRequired));
    }

    #[test]
    fn successful_send_clears_the_draft() {
        let (status, clear_fields) = settle_submission(Ok(()));
        assert_eq!(status, SubmissionStatus::Success);
        assert!(clear_fields);
    }

    #[test]
    fn failed_send_preserves_the_draft_and_prefixes_the_error() {
        let (status, clear_fields) = settle_submission(Err("relay unreachable".to_string()));
        assert!(!clear_fields);
        assert_eq!(
            status.error(),
            Some("Error sending the message. Please try again. relay unreachable")
        );
    }

    #[test]
    fn status_starts_idle_and_tracks_sending() {
        let status = SubmissionStatus::default();
        assert_eq!(status, SubmissionStatus::Idle);
        assert!(!status.is_sending());
        assert!(SubmissionStatus::Sending.is_sending());
        assert_eq!(
            SubmissionStatus::Error("boom".to_string()).error(),
            Some("boom")
        );
    }
}

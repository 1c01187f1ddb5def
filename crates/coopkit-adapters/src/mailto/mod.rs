//! `mailto:` link composer for the quote handoff.

use coopkit_core::{
    application::{ApplicationError, ports::QuoteComposer},
    domain::QuoteRequest,
    error::CoopResult,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::instrument;

/// Recipient used when none is configured.
pub const DEFAULT_RECIPIENT: &str = "sales@example.com";

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `mailto:<recipient>?subject=..&body=..` links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoComposer {
    recipient: String,
}

impl MailtoComposer {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Default for MailtoComposer {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

impl QuoteComposer for MailtoComposer {
    #[instrument(skip_all, fields(recipient = %self.recipient))]
    fn compose(&self, request: &QuoteRequest) -> CoopResult<String> {
        let recipient = self.recipient.trim();
        if recipient.is_empty()
            || !recipient.contains('@')
            || recipient.contains(|c: char| c.is_whitespace() || matches!(c, '?' | '&'))
        {
            return Err(ApplicationError::ComposeFailed {
                reason: format!("invalid recipient address '{}'", self.recipient),
            }
            .into());
        }

        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&request.subject()),
            encode_component(&request.body())
        ))
    }
}

/// Percent-encode with `encodeURIComponent` semantics.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

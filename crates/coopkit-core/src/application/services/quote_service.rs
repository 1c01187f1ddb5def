//! Quote Service - quote handoff.
//!
//! Formats the subject and body of a quote request and asks the injected
//! composer for a link an external mail client can open.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::QuoteComposer, domain::QuoteRequest, error::CoopResult,
};

/// Result of a quote handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handoff {
    pub subject: String,
    pub body: String,
    pub link: String,
}

/// Service for the quote-request flow.
pub struct QuoteService {
    composer: Box<dyn QuoteComposer>,
}

impl QuoteService {
    /// Create a new quote service.
    pub fn new(composer: Box<dyn QuoteComposer>) -> Self {
        Self { composer }
    }

    /// Subject, body and composed link for `request`.
    #[instrument(skip_all, fields(config = %request.configuration))]
    pub fn handoff(&self, request: &QuoteRequest) -> CoopResult<Handoff> {
        let link = self.composer.compose(request)?;
        debug!(link_len = link.len(), "Quote composed");

        Ok(Handoff {
            subject: request.subject(),
            body: request.body(),
            link,
        })
    }
}

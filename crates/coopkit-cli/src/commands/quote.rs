//! `coopkit quote`: prepare the quote-request email.

use tracing::{info, instrument};

use coopkit_adapters::MailtoComposer;
use coopkit_core::{application::QuoteService, domain::QuoteRequest};

use crate::{cli::QuoteArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: QuoteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let selection = args.selection.resolve(&config.defaults);
    let request = QuoteRequest::new(selection, args.contact());

    let service = QuoteService::new(Box::new(MailtoComposer::new(config.quote.recipient)));
    let handoff = service.handoff(&request)?;
    info!("Quote prepared");

    if args.mailto {
        output.data(&handoff.link)?;
    } else if output.is_json() {
        output.json(&handoff)?;
    } else {
        output.header(&format!("Subject: {}", handoff.subject))?;
        output.print("")?;
        output.data(&handoff.body)?;
    }

    Ok(())
}

//! Continuation-token paging over a list operation.

use crate::context::InvocationContext;
use crate::envelope::Envelope;
use crate::error::InvokeError;
use crate::invoker::Invoker;
use crate::operation::Paginated;
use crate::wire::Transport;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PageState {
    /// The next request carries this token (`None` for the first page).
    Fetching(Option<String>),
    Done,
}

/// Drives a [`Paginated`] operation one page at a time.
///
/// In auto mode every page is fetched until the server stops returning a
/// token. In manual mode (`--no-auto-iteration`, or the caller supplied a
/// starting token) exactly one page is fetched.
pub struct Paginator<'a, O: Paginated, T> {
    invoker: &'a Invoker<T>,
    ctx: InvocationContext<O>,
    state: PageState,
    manual: bool,
}

impl<'a, O: Paginated, T: Transport> Paginator<'a, O, T> {
    pub fn new(invoker: &'a Invoker<T>, ctx: InvocationContext<O>) -> Self {
        let initial = O::token(ctx.input())
            .filter(|token| !token.is_empty())
            .map(String::from);
        let manual = ctx.no_auto_iteration() || initial.is_some();
        Self {
            invoker,
            ctx,
            state: PageState::Fetching(initial),
            manual,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn is_done(&self) -> bool {
        self.state == PageState::Done
    }

    /// Fetch and project the next page, or `None` once the sequence is over.
    pub async fn next_page(&mut self, cancel: &CancellationToken) -> Option<Envelope> {
        let PageState::Fetching(token) = std::mem::replace(&mut self.state, PageState::Done)
        else {
            return None;
        };

        if cancel.is_cancelled() {
            return Some(Envelope::failed(InvokeError::Cancelled {
                operation: O::DESCRIPTOR.name.to_string(),
            }));
        }

        let sent = token.clone();
        O::set_token(self.ctx.input_mut(), token);
        let output = match self.invoker.invoke::<O>(self.ctx.input(), cancel).await {
            Ok(output) => output,
            Err(err) => return Some(Envelope::failed(err)),
        };

        let envelope = Envelope::from(self.ctx.project(&output));
        if envelope.is_error() {
            return Some(envelope);
        }

        let Some(next) = O::next_token(&output).filter(|t| !t.is_empty()) else {
            return Some(envelope);
        };

        if self.manual {
            return Some(envelope.with_note(format!(
                "More results are available for {}. Run again with --next-token {} to fetch the next page.",
                O::DESCRIPTOR.name,
                next
            )));
        }

        if sent.as_deref() == Some(next) {
            log::warn!(
                "{} returned the token it was sent; stopping pagination",
                O::DESCRIPTOR.qualified_name()
            );
            return Some(envelope);
        }

        log::debug!("{} continuing with next page", O::DESCRIPTOR.qualified_name());
        self.state = PageState::Fetching(Some(next.to_string()));
        Some(envelope)
    }

    /// Fetch every page the mode allows. The last envelope is the failure,
    /// if one occurred.
    pub async fn run(mut self, cancel: &CancellationToken) -> Vec<Envelope> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page(cancel).await {
            pages.push(page);
        }
        pages
    }
}

/// Run a paginated operation to completion.
pub async fn paginate<O, T>(
    invoker: &Invoker<T>,
    ctx: InvocationContext<O>,
    cancel: &CancellationToken,
) -> Vec<Envelope>
where
    O: Paginated,
    T: Transport,
{
    Paginator::new(invoker, ctx).run(cancel).await
}

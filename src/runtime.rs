//! Runs one command's typed input through the invocation pipeline.

use awscmd_core::{
    paginate, CancellationToken, Envelope, InvocationContext, InvocationOptions, Invoker,
    Operation, Paginated, Transport,
};
use std::io::{self, BufRead, Write};

/// Asked before a destructive call: `(operation, target) -> proceed?`
pub type ConfirmFn = dyn Fn(&str, &str) -> bool + Send + Sync;

pub struct Runtime<T> {
    invoker: Invoker<T>,
    options: InvocationOptions,
    cancel: CancellationToken,
    confirm: Box<ConfirmFn>,
}

impl<T: Transport> Runtime<T> {
    pub fn new(transport: T, options: InvocationOptions, cancel: CancellationToken) -> Self {
        Self {
            invoker: Invoker::new(transport),
            options,
            cancel,
            confirm: Box::new(prompt_terminal),
        }
    }

    /// Replace the terminal prompt.
    pub fn with_confirm<F>(mut self, confirm: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn options(&self) -> &InvocationOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        self.invoker.transport()
    }

    /// Run a single-shot operation.
    pub async fn execute<O: Operation>(&self, input: O::Input) -> Vec<Envelope> {
        match self.prepare::<O>(input) {
            Ok(Some(ctx)) => vec![self.invoker.execute(&ctx, &self.cancel).await],
            Ok(None) => Vec::new(),
            Err(envelope) => vec![envelope],
        }
    }

    /// Run a paginated operation, one envelope per page.
    pub async fn execute_paged<O: Paginated>(&self, input: O::Input) -> Vec<Envelope> {
        match self.prepare::<O>(input) {
            Ok(Some(ctx)) => paginate(&self.invoker, ctx, &self.cancel).await,
            Ok(None) => Vec::new(),
            Err(envelope) => vec![envelope],
        }
    }

    /// Validate the input and ask for confirmation. `Ok(None)` means the
    /// caller declined.
    fn prepare<O: Operation>(
        &self,
        input: O::Input,
    ) -> Result<Option<InvocationContext<O>>, Envelope> {
        let ctx = InvocationContext::<O>::new(input, &self.options).map_err(Envelope::failed)?;
        if !ctx.should_process(self.options.force, |op, target| (self.confirm)(op, target)) {
            log::info!("{} skipped: not confirmed", O::DESCRIPTOR.qualified_name());
            return Ok(None);
        }
        Ok(Some(ctx))
    }
}

/// `[y/N]` on stderr, answer from stdin. Anything but yes declines.
pub fn prompt_terminal(operation: &str, target: &str) -> bool {
    let mut stderr = io::stderr();
    let _ = write!(
        stderr,
        "Are you sure you want to perform {} on target \"{}\"? [y/N] ",
        operation, target
    );
    let _ = stderr.flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

//! Conversion Application Service
//!
//! Drives the session loop and the persist protocol through the ports.
//! Contains NO infrastructure logic - pure orchestration.

use std::path::PathBuf;

use conversion_types::{
    Console, ConversionRecord, ConversionRequest, OutputStore, ProviderError, RateProvider,
    SessionError,
};
use exchange_rates::{convert_at_rate, floor_to_cents};

use crate::prompt::{self, EXIT_HINT, Flow};
use crate::session::{Session, SessionEnd};

/// Where a conversion's multiplier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Cache,
    Provider,
}

/// Application service for conversion sessions.
///
/// Generic over `P: RateProvider` and `S: OutputStore` - the adapters are
/// injected at compile time, so tests can run against in-memory ports.
pub struct ConversionService<P: RateProvider, S: OutputStore> {
    provider: P,
    store: S,
}

impl<P: RateProvider, S: OutputStore> ConversionService<P, S> {
    /// Creates a new conversion service with the given adapters.
    pub fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Resolves one request and appends the resulting record to the session.
    ///
    /// A cached pair is served without a provider call. On a miss the raw
    /// rate is fetched, the floored converted amount is cached for the pair,
    /// and the record is appended. Provider failures leave the session untouched.
    #[tracing::instrument(skip(self, session), fields(pair = %request.pair()))]
    pub async fn convert(
        &self,
        session: &mut Session,
        request: ConversionRequest,
    ) -> Result<(ConversionRecord, RateSource), ProviderError> {
        let pair = request.pair();
        let amount = request.amount.value();

        if let Some(cached) = session.cache.get(&pair) {
            tracing::debug!(cached, "Rate cache hit");
            let converted = floor_to_cents(amount * cached);
            let record = ConversionRecord::new(session.date(), &request, converted);
            session.output.append(record.clone());
            return Ok((record, RateSource::Cache));
        }

        let quote = self
            .provider
            .fetch(session.date(), request.base, request.target)
            .await?;
        let converted = convert_at_rate(amount, quote.rate);
        tracing::info!(rate = quote.rate, converted, "Converted via provider");

        session.cache.put(pair, converted);
        let record = ConversionRecord::new(session.date(), &request, converted);
        session.output.append(record.clone());
        Ok((record, RateSource::Provider))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Session Loop
    // ─────────────────────────────────────────────────────────────────────────────

    /// Runs prompt/convert iterations until `end` or closed input, then
    /// persists the records.
    ///
    /// Provider failures are reported and the loop moves on to the next
    /// prompt cycle; only console or store failures abort with an error.
    pub async fn run<C: Console + ?Sized>(
        &self,
        session: &mut Session,
        console: &mut C,
    ) -> Result<SessionEnd, SessionError> {
        let ending = self.interact(session, console).await?;
        self.finish(session, console, ending).await
    }

    /// Same as [`run`](Self::run), but `interrupt` resolving while the user
    /// is still being prompted ends the session with nothing written.
    ///
    /// The interrupt is not watched while the output file is written.
    pub async fn run_until_interrupted<C, I>(
        &self,
        session: &mut Session,
        console: &mut C,
        interrupt: I,
    ) -> Result<SessionEnd, SessionError>
    where
        C: Console + ?Sized,
        I: Future<Output = ()>,
    {
        let ending = tokio::select! {
            ending = self.interact(session, console) => ending?,
            () = interrupt => {
                tracing::info!("Interrupt received, discarding session");
                return Ok(SessionEnd::Interrupted);
            }
        };
        self.finish(session, console, ending).await
    }

    async fn interact<C: Console + ?Sized>(
        &self,
        session: &mut Session,
        console: &mut C,
    ) -> Result<Ending, SessionError> {
        loop {
            console.print(EXIT_HINT);

            let request = match prompt::read_request(console).await? {
                Flow::Continue(request) => request,
                Flow::Save => return self.choose_target(console).await,
                Flow::Discard => return Ok(Ending::Done(SessionEnd::Interrupted)),
            };

            match self.convert(session, request).await {
                Ok((record, RateSource::Cache)) => {
                    console.print("Adding from cache...");
                    echo(console, &record);
                }
                Ok((record, RateSource::Provider)) => {
                    console.print(&format!("Converted amount: {:.2}", record.converted_amount));
                    echo(console, &record);
                }
                Err(e) => {
                    tracing::info!(error = %e, "Conversion abandoned");
                    console.print("API response failed.");
                    console.print(&e.to_string());
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Persist Protocol
    // ─────────────────────────────────────────────────────────────────────────────

    /// Picks the file to write, resolving name conflicts interactively.
    ///
    /// The default target is taken directly when free. Otherwise the user
    /// may pick another name in the output directory (re-checked for
    /// conflicts), overwrite the current target, or leave without saving.
    async fn choose_target<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> Result<Ending, SessionError> {
        let dir = self.store.directory().display().to_string();
        let mut target = self.store.default_target();

        loop {
            if !self.store.exists(&target).await? {
                return Ok(Ending::Write(target));
            }

            console.print(&format!("Filename {} already exists.", target.display()));
            let Some(choice) = console
                .read_line(&format!("Do you want to write to another file in '{dir}/'? y/n: "))
                .await?
            else {
                return Ok(Ending::Done(SessionEnd::Interrupted));
            };

            if choice.trim().eq_ignore_ascii_case("y") {
                let ask = format!("Enter your custom output file name for directory {dir}/: ");
                let Some(name) = console.read_line(&ask).await? else {
                    return Ok(Ending::Done(SessionEnd::Interrupted));
                };
                match self.store.resolve(name.trim()) {
                    Some(path) => target = path,
                    None => console.print("Please enter a plain file name without directories."),
                }
                continue;
            }

            console.print("Do you want to:");
            console.print("(1). override your existing file");
            console.print(&format!("(2). exit without saving to {}?", target.display()));
            let Some(choice) = console.read_line("Default = None: ").await? else {
                return Ok(Ending::Done(SessionEnd::Interrupted));
            };

            match choice.trim() {
                "1" => return Ok(Ending::Write(target)),
                "2" => {
                    tracing::info!("Leaving without saving");
                    return Ok(Ending::Done(SessionEnd::NotSaved));
                }
                _ => console.print("Please make a valid choice."),
            }
        }
    }

    async fn finish<C: Console + ?Sized>(
        &self,
        session: &Session,
        console: &mut C,
        ending: Ending,
    ) -> Result<SessionEnd, SessionError> {
        match ending {
            Ending::Write(target) => {
                self.store.write(&target, session.output().records()).await?;
                console.print("Gracefully exiting...");
                Ok(SessionEnd::Saved(target))
            }
            Ending::Done(end) => Ok(end),
        }
    }
}

/// How the interactive part of a session ended.
enum Ending {
    Write(PathBuf),
    Done(SessionEnd),
}

/// Prints a record as a single-line JSON object.
fn echo<C: Console + ?Sized>(console: &mut C, record: &ConversionRecord) {
    match serde_json::to_string(record) {
        Ok(json) => console.print(&json),
        Err(e) => tracing::error!(error = %e, "Failed to render record"),
    }
}

//! Validated input loops.
//!
//! Each reader re-prompts until it gets valid input, the `end` sentinel, or
//! a closed input stream. Nothing here exits the process: the outcome is
//! returned as a [`Flow`] and acted on by the session loop.

use std::io;

use conversion_types::{Amount, Console, ConversionRequest, CurrencyCode};
use exchange_rates::ISO_4217_REFERENCE_URL;

pub use conversion_types::domain::amount::INVALID_AMOUNT_HINT;

/// Typed at any prompt to finish the session and save.
pub const SENTINEL: &str = "end";

pub const EXIT_HINT: &str = "Type 'end' at any time to gracefully exit the program.";
pub const EMPTY_CURRENCY_HINT: &str = "Please enter the 3 digit code of your target currency.";
pub const UNKNOWN_CURRENCY_HINT: &str = "Please enter an ISO 4217 compliant currency code.";

/// What the session loop should do after a prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow<T> {
    /// Valid input; keep going.
    Continue(T),
    /// The sentinel was entered: terminate and save.
    Save,
    /// Input stream closed: terminate without saving.
    Discard,
}

fn is_sentinel(text: &str) -> bool {
    text.eq_ignore_ascii_case(SENTINEL)
}

/// Unwraps `Flow::Continue`, returning early with any terminating flow.
macro_rules! proceed {
    ($flow:expr) => {
        match $flow {
            Flow::Continue(value) => value,
            Flow::Save => return Ok(Flow::Save),
            Flow::Discard => return Ok(Flow::Discard),
        }
    };
}

/// Prompts until a valid amount is entered.
pub async fn read_amount<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> io::Result<Flow<Amount>> {
    loop {
        let Some(line) = console.read_line(prompt).await? else {
            return Ok(Flow::Discard);
        };
        let text = line.trim();

        if text.is_empty() {
            console.print(INVALID_AMOUNT_HINT);
            continue;
        }
        if is_sentinel(text) {
            return Ok(Flow::Save);
        }

        match Amount::parse(text) {
            Ok(amount) => return Ok(Flow::Continue(amount)),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected amount");
                console.print(INVALID_AMOUNT_HINT);
            }
        }
    }
}

/// Prompts until a valid ISO 4217 code is entered. Input is case-insensitive.
pub async fn read_currency<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> io::Result<Flow<CurrencyCode>> {
    loop {
        let Some(line) = console.read_line(prompt).await? else {
            return Ok(Flow::Discard);
        };
        let text = line.trim().to_uppercase();

        if text.is_empty() {
            console.print(EMPTY_CURRENCY_HINT);
            continue;
        }
        if is_sentinel(&text) {
            return Ok(Flow::Save);
        }

        match text.parse::<CurrencyCode>() {
            Ok(code) => return Ok(Flow::Continue(code)),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected currency code");
                console.print(UNKNOWN_CURRENCY_HINT);
                console.print(ISO_4217_REFERENCE_URL);
            }
        }
    }
}

/// Reads amount, base currency and target currency, in that order.
pub async fn read_request<C: Console + ?Sized>(
    console: &mut C,
) -> io::Result<Flow<ConversionRequest>> {
    let amount = proceed!(read_amount(console, "Enter amount: ").await?);
    let base = proceed!(read_currency(console, "Enter input currency: ").await?);
    let target = proceed!(read_currency(console, "Enter target currency: ").await?);

    Ok(Flow::Continue(ConversionRequest::new(amount, base, target)))
}

//! State of the conversion form, independent of any UI toolkit.
//!
//! The front renders a [`FormState`] and feeds user actions back into it. A
//! submit is split into [`FormState::begin_submit`] and
//! [`FormState::finish_submit`] so the UI can render the loading state while
//! the relay call is in flight. Every outcome of that call, success or error,
//! goes through `finish_submit`, which is what clears the loading flag.

use std::time::Duration;

use super::client::{ConvertClientTrait, ConvertError};
use super::dto::ConvertRequest;

/// How long the "copied" indicator stays on after a copy.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

pub const EMPTY_INPUT: &str = "Please enter a query";
pub const ALREADY_CONVERTING: &str = "A conversion is already running";
pub const CONVERTED: &str = "Query converted successfully!";
pub const RATE_LIMITED: &str = "Rate limit exceeded. Please wait a moment.";
pub const QUOTA_EXHAUSTED: &str = "AI credits depleted. Please add credits.";
pub const CONVERT_FAILED: &str = "Failed to convert query";
pub const COPIED: &str = "SQL copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    Success(&'static str),
    Error(&'static str),
}

impl Toast {
    pub fn text(&self) -> &'static str {
        match self {
            Toast::Success(text) | Toast::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Toast::Error(_))
    }
}

impl From<&ConvertError> for Toast {
    fn from(error: &ConvertError) -> Self {
        Toast::Error(match error {
            ConvertError::RateLimited(_) => RATE_LIMITED,
            ConvertError::QuotaExhausted(_) => QUOTA_EXHAUSTED,
            ConvertError::Failed(_) => CONVERT_FAILED,
        })
    }
}

/// Identifies one copy action. Only the latest ticket may clear the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    input: String,
    output: String,
    is_loading: bool,
    copied: bool,
    copy_generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// The input is locked while a conversion runs.
    pub fn set_input(&mut self, input: impl Into<String>) {
        if !self.is_loading {
            self.input = input.into();
        }
    }

    pub fn use_example(&mut self, example: &str) {
        self.set_input(example);
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    /// Validates the input and enters the loading state.
    ///
    /// On rejection the state is left exactly as it was.
    pub fn begin_submit(&mut self) -> Result<ConvertRequest, Toast> {
        if self.input.trim().is_empty() {
            return Err(Toast::Error(EMPTY_INPUT));
        }
        if self.is_loading {
            return Err(Toast::Error(ALREADY_CONVERTING));
        }

        self.is_loading = true;
        self.output.clear();
        self.reset_copied();

        Ok(ConvertRequest {
            query: self.input.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<String, ConvertError>) -> Toast {
        self.is_loading = false;
        match result {
            Ok(sql) => {
                self.output = sql;
                Toast::Success(CONVERTED)
            }
            Err(error) => {
                tracing::error!("Conversion error: {}", error);
                Toast::from(&error)
            }
        }
    }

    /// Text a copy action would place on the clipboard, if there is any.
    pub fn copy_text(&self) -> Option<&str> {
        (!self.output.is_empty()).then_some(self.output.as_str())
    }

    /// Turns the indicator on. The returned ticket clears it later.
    pub fn mark_copied(&mut self) -> (CopyTicket, Toast) {
        self.copy_generation += 1;
        self.copied = true;
        (CopyTicket(self.copy_generation), Toast::Success(COPIED))
    }

    /// Turns the indicator off unless a newer copy (or submit) superseded the
    /// ticket. Returns whether anything changed.
    pub fn clear_copied(&mut self, ticket: CopyTicket) -> bool {
        if self.copied && ticket.0 == self.copy_generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    fn reset_copied(&mut self) {
        self.copy_generation += 1;
        self.copied = false;
    }
}

/// Runs one conversion against `client`.
pub async fn submit<C: ConvertClientTrait>(form: &mut FormState, client: &C) -> Toast {
    let request = match form.begin_submit() {
        Ok(request) => request,
        Err(toast) => return toast,
    };
    let result = client.convert(&request).await;
    form.finish_submit(result)
}

#[derive(Debug, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub Box<str>);

pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No output to copy.
    Nothing,
    Copied(CopyTicket),
    Failed,
}

impl CopyOutcome {
    pub fn toast(&self) -> Option<Toast> {
        match self {
            CopyOutcome::Nothing => None,
            CopyOutcome::Copied(_) => Some(Toast::Success(COPIED)),
            CopyOutcome::Failed => Some(Toast::Error(COPY_FAILED)),
        }
    }
}

/// Places the current output on the clipboard and turns the indicator on.
///
/// The caller owns the timer: after [`COPIED_INDICATOR_DURATION`] it hands the
/// ticket back to [`FormState::clear_copied`].
pub async fn copy<C: Clipboard>(form: &mut FormState, clipboard: &C) -> CopyOutcome {
    let Some(text) = form.copy_text() else {
        return CopyOutcome::Nothing;
    };

    let written = clipboard.write_text(text).await;
    match written {
        Ok(()) => CopyOutcome::Copied(form.mark_copied().0),
        Err(error) => {
            tracing::error!("{}", error);
            CopyOutcome::Failed
        }
    }
}

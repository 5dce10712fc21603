use std::borrow::Cow;

#[fp_derive::fp_error]
pub enum SynthesisError {
    /// Inputs that make generation impossible; raised before anything is produced.
    #[error("Configuration error{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An external building source could not deliver rows. Never fatal to a run.
    #[error("External source unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal synthesis error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SynthesisError {
    pub(crate) fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Configuration { message: message.into(), context: None }
    }

    /// Shorthand for sources reporting a failed fetch.
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into(), context: None }
    }
}

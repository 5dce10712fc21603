use fp_synthesis::SynthesisError;
use std::borrow::Cow;

#[fp_derive::fp_error]
pub enum IngestError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed rows{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid WKT polygon{}: {message}", format_context(.context))]
    Wkt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A row with non-finite numbers or a non-positive area.
    #[error("Invalid building row{}: {message}", format_context(.context))]
    InvalidRow { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The dataset is not present where it was expected.
    #[error("Source unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal ingest error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IngestError {
    pub(crate) fn wkt(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Wkt { message: message.into(), context: None }
    }
}

/// Every ingest failure is, to the pipeline, an unavailable source.
impl From<IngestError> for SynthesisError {
    fn from(err: IngestError) -> Self {
        Self::Unavailable { message: err.to_string().into(), context: None }
    }
}

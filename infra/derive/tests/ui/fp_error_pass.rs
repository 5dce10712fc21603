use fp_derive::fp_error;
use std::borrow::Cow;

#[fp_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseFloatError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<f64> {
    raw.parse::<f64>().context("Parsing area")
}

fn main() {
    let _ = parse("12.5");
}

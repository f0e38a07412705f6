use crate::keys::normalize;
use crate::value::{POSITIONAL_KEY, ParsedResult, Scalar};

const SEPARATOR: &str = "--";

/// Schema-less argument parser.
///
/// Every token is classified on its own (plus one token of lookahead for
/// `--key value`), so parsing never fails: anything unrecognized ends up in
/// the positional list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    camel_case: bool,
}

impl Parser {
    /// Create a parser that keeps long option keys as written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert kebab-case long option keys to camelCase.
    ///
    /// Short flags are never converted.
    pub fn camel_case(mut self, enabled: bool) -> Self {
        self.camel_case = enabled;
        self
    }

    /// Parse `tokens` (usually `argv` without the program name).
    ///
    /// - `--` stops parsing; everything after it is positional.
    /// - `--key=value` splits on the first `=`.
    /// - `--key value` takes the next token unless it starts with `-`.
    /// - `--key` alone is a boolean flag.
    /// - `-abc` sets `a`, `b` and `c` (ASCII letters and digits only).
    /// - Repeated keys collect into a list in the order seen.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParsedResult {
        let mut result = ParsedResult::default();
        let mut i = 0;

        while i < tokens.len() {
            let arg = tokens[i].as_ref();

            if arg == SEPARATOR {
                let rest = &tokens[i + 1..];
                tracing::trace!(count = rest.len(), "separator; remaining tokens are positional");
                result.extend_positional(rest.iter().map(|t| t.as_ref().to_owned()));
                break;
            }

            // Bare `--` was handled above, so the body is never empty here.
            if let Some(body) = arg.strip_prefix("--") {
                if let Some((key, value)) = body.split_once('=') {
                    self.record_long(&mut result, key, Scalar::Str(value.to_string()));
                } else if let Some(next) = option_value(tokens, i + 1) {
                    self.record_long(&mut result, body, Scalar::Str(next.to_string()));
                    i += 1;
                } else {
                    self.record_long(&mut result, body, Scalar::Bool(true));
                }
            } else if let Some(cluster) = short_flag_cluster(arg) {
                for flag in cluster.chars() {
                    tracing::trace!(%flag, "short flag");
                    result.record(flag.to_string(), Scalar::Bool(true));
                }
            } else {
                tracing::trace!(value = arg, "positional");
                result.push_positional(arg.to_string());
            }

            i += 1;
        }

        if result.take_reserved().is_some() {
            tracing::debug!("option `--{POSITIONAL_KEY}` replaced by positional arguments");
        }
        result
    }

    fn record_long(&self, result: &mut ParsedResult, key: &str, value: Scalar) {
        let key = normalize(key, self.camel_case);
        tracing::trace!(key = %key, ?value, "long option");
        result.record(key.into_owned(), value);
    }
}

/// The token at `idx`, if `--key` should consume it as its value.
fn option_value<S: AsRef<str>>(tokens: &[S], idx: usize) -> Option<&str> {
    let next = tokens.get(idx)?.as_ref();
    // Also rejects the `--` separator.
    (!next.starts_with('-')).then_some(next)
}

/// Return the flag characters of `-abc`, or `None` if `arg` is not a cluster.
fn short_flag_cluster(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix('-')?;
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Some(rest)
    } else {
        None
    }
}

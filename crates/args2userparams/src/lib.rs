//! Convert command-line arguments into a JSON object.
//!
//! The output is meant to be handed to another process as one structured
//! parameter (e.g. `--user-param '<json>'`). Parsing is schema-less and never
//! fails; unrecognized tokens become positional arguments under `_`.
//!
//! Supported forms:
//! - `--flag`               -> `{"flag": true}`
//! - `-f`, `-abc`           -> `{"f": true}`, `{"a": true, "b": true, "c": true}`
//! - `--key=value`          -> `{"key": "value"}`
//! - `--key value`          -> `{"key": "value"}`
//! - `--key a --key b`      -> `{"key": ["a", "b"]}`
//! - `positional`           -> `{"_": ["positional"]}`
//! - `-- --not-a-flag`      -> `{"_": ["--not-a-flag"]}`
//!
//! With camelCase enabled, `--my-flag` becomes `{"myFlag": true}`.
//!
//! # Example
//!
//! ```
//! let argv = ["--verbose", "--output=out.txt", "in.txt"];
//! let json = args2userparams::parse_args_json(&argv, false)?;
//! assert_eq!(json, r#"{"verbose":true,"output":"out.txt","_":["in.txt"]}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

mod keys;
mod parser;
mod value;

pub use keys::{normalize, to_camel_case};
pub use parser::Parser;
pub use value::{POSITIONAL_KEY, ParsedResult, Scalar, Value};

/// Parse `tokens` into a [`ParsedResult`].
pub fn parse_args<S: AsRef<str>>(tokens: &[S], camel_case: bool) -> ParsedResult {
    Parser::new().camel_case(camel_case).parse(tokens)
}

/// Parse `tokens` and render the result as compact JSON.
pub fn parse_args_json<S: AsRef<str>>(
    tokens: &[S],
    camel_case: bool,
) -> serde_json::Result<String> {
    to_json(&parse_args(tokens, camel_case))
}

/// Render a parsed result as compact JSON (`_` is always the last field).
pub fn to_json(result: &ParsedResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

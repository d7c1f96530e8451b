//! Request argument string parsing.

use super::error::ParseError;
use std::collections::HashMap;

/// Parse `name=value;name=value` into a map.
///
/// Each pair is split on its first `=`, so values may themselves contain
/// `=`. A pair without `=` is an error, including the empty pair left by a
/// trailing `;`. Later duplicates win.
///
/// # Examples
///
/// ```
/// use compass_utils::utils::args::parse_request_arg_dict;
///
/// let args = parse_request_arg_dict("a=1;b=2=3").unwrap();
/// assert_eq!(args["a"], "1");
/// assert_eq!(args["b"], "2=3");
/// ```
pub fn parse_request_arg_dict(text: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut args = HashMap::new();

    for pair in text.split(';') {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            tracing::warn!(pair, "request argument has no `=`");
            ParseError::MissingArgSeparator(pair.to_string())
        })?;
        args.insert(name.to_string(), value.to_string());
    }

    Ok(args)
}

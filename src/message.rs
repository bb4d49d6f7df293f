//! Message extraction from the forwarded argument list.
//!
//! Backends that deliver free text (currently only the webhook backend)
//! pull their message out of the wrapper's own arguments: an explicit
//! `-message <text>` pair wins, otherwise the last argument that does not
//! look like a flag is used.

/// Placeholder delivered when no usable message is found in the arguments.
pub const EMPTY_MESSAGE: &str = "<empty message>";

/// Extracts the message from the forwarded arguments.
///
/// A `-message` flag with no following argument is treated as absent and
/// the fallback search applies.
pub fn parse_message(args: &[String]) -> String {
    if let Some(pos) = args.iter().position(|arg| arg == "-message") {
        if let Some(value) = args.get(pos + 1) {
            return value.clone();
        }
    }

    if let Some(last) = args.iter().rev().find(|arg| !arg.starts_with('-')) {
        return last.clone();
    }

    EMPTY_MESSAGE.to_string()
}

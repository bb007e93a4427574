use crate::fallback::{ExitPolicy, FallbackChain, Terminal};
use crate::runner::ToolCommand;
use crate::Message;

/// Single `osascript` invocation; a missing `osascript` is an error.
///
/// `display dialog` exits non-zero when the user cancels, which still
/// counts as the message having been shown.
pub(super) fn display_chain(message: &Message) -> FallbackChain {
    FallbackChain::new(Terminal::Unavailable).candidate(
        ToolCommand::new("osascript").args(["-e".to_string(), dialog_script(message)]),
        ExitPolicy::Lenient,
    )
}

fn dialog_script(message: &Message) -> String {
    format!(
        r#"tell application "System Events"
    activate
    display dialog "{}" buttons {{"OK"}} default button "OK" with title "{}"
end tell"#,
        escape_applescript(message.text()),
        escape_applescript(message.title())
    )
}

/// Escape text for an AppleScript string literal
fn escape_applescript(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

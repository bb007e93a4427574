use crate::fallback::{ExitPolicy, FallbackChain, Terminal};
use crate::runner::ToolCommand;
use crate::Message;

/// zenity, then kdialog, then xmessage, then the console.
///
/// Each tool is strict: once found, a non-zero exit is an error.
pub(super) fn display_chain(message: &Message) -> FallbackChain {
    FallbackChain::new(Terminal::Console)
        .candidate(
            ToolCommand::new("zenity").args([
                "--info".to_string(),
                format!("--title={}", message.title()),
                format!("--text={}", escape_zenity_text(message.text())),
            ]),
            ExitPolicy::Strict,
        )
        .candidate(
            ToolCommand::new("kdialog")
                .arg("--msgbox")
                .arg(message.text())
                .args(["--title", message.title()]),
            ExitPolicy::Strict,
        )
        .candidate(
            ToolCommand::new("xmessage")
                .arg("-center")
                .arg(message.text()),
            ExitPolicy::Strict,
        )
}

/// zenity parses `--text` as Pango markup and expands backslash escapes
fn escape_zenity_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

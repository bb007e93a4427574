use crate::fallback::{ExitPolicy, FallbackChain, Terminal};
use crate::runner::ToolCommand;
use crate::Message;

/// Single PowerShell `MessageBox` invocation; a missing `powershell` is an error.
pub(super) fn display_chain(message: &Message) -> FallbackChain {
    let script = format!(
        "Add-Type -AssemblyName PresentationFramework; \
         [System.Windows.MessageBox]::Show(\"{}\", \"{}\")",
        escape_powershell(message.text()),
        escape_powershell(message.title())
    );

    FallbackChain::new(Terminal::Unavailable).candidate(
        ToolCommand::new("powershell").args(["-NoProfile".to_string(), "-Command".to_string(), script]),
        ExitPolicy::Lenient,
    )
}

/// Escape text for a double-quoted PowerShell string
fn escape_powershell(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '`' => escaped.push_str("``"),
            '"' => escaped.push_str("`\""),
            // PowerShell also closes double-quoted strings on typographic quotes
            '\u{201C}' | '\u{201D}' | '\u{201E}' => {
                escaped.push('`');
                escaped.push(c);
            }
            '$' => escaped.push_str("`$"),
            '\n' => escaped.push_str("`n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

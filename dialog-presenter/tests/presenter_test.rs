//! Branch selection and fallback behaviour of the dialog presenter

mod common;

use common::*;
use dialog_presenter::{
    run, DialogPresenter, Message, Platform, Presentation, PresenterConfig, PresenterError,
    ToolExit, DIAGNOSTIC_LINE, EXIT_PROMPT,
};
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

fn cwd_message() -> Message {
    Message::working_directory("Test Rust", &PathBuf::from("/home/dev/work space"))
}

fn present(platform: Platform, runner: RecordingRunner) -> (Result<Presentation, PresenterError>, RecordingRunner, String) {
    init_tracing();
    let mut presenter = DialogPresenter::with_runner(runner);
    let mut console = Vec::new();
    let result = presenter.present(&platform, &cwd_message(), &mut console);
    (result, presenter.into_runner(), String::from_utf8(console).unwrap())
}

#[test]
fn test_linux_first_tool_present_skips_the_rest() {
    let runner = RecordingRunner::empty()
        .with_tool("zenity")
        .with_tool("kdialog")
        .with_tool("xmessage");

    let (result, runner, console) = present(Platform::Linux, runner);

    assert_eq!(
        result.unwrap(),
        Presentation::Dialog {
            tool: "zenity".to_string()
        }
    );
    assert_eq!(runner.programs(), vec!["zenity"]);
    assert!(console.is_empty());
}

#[test]
fn test_linux_falls_back_to_xmessage_with_message_argument() {
    let runner = RecordingRunner::empty().with_tool("xmessage");

    let (result, runner, console) = present(Platform::Linux, runner);

    assert_eq!(
        result.unwrap(),
        Presentation::Dialog {
            tool: "xmessage".to_string()
        }
    );
    assert_eq!(runner.programs(), vec!["zenity", "kdialog", "xmessage"]);
    let xmessage = runner.invocations.last().unwrap();
    assert!(xmessage
        .args
        .iter()
        .any(|arg| arg == "Working directory:\n/home/dev/work space"));
    assert!(console.is_empty());
}

#[test]
fn test_linux_kdialog_used_when_zenity_missing() {
    let runner = RecordingRunner::empty().with_tool("kdialog").with_tool("xmessage");

    let (result, runner, _) = present(Platform::Linux, runner);

    assert_eq!(
        result.unwrap(),
        Presentation::Dialog {
            tool: "kdialog".to_string()
        }
    );
    assert_eq!(runner.programs(), vec!["zenity", "kdialog"]);
}

#[test]
fn test_linux_prints_verbatim_when_no_tool_installed() {
    let (result, runner, console) = present(Platform::Linux, RecordingRunner::empty());

    assert_eq!(result.unwrap(), Presentation::Console);
    assert_eq!(runner.programs(), vec!["zenity", "kdialog", "xmessage"]);
    assert_eq!(console, "Working directory:\n/home/dev/work space\n");
}

#[test]
fn test_linux_found_tool_failing_is_fatal() {
    let runner = RecordingRunner::empty()
        .with_exit("zenity", ToolExit::Failed { code: Some(1) })
        .with_tool("kdialog");

    let (result, runner, console) = present(Platform::Linux, runner);

    match result {
        Err(PresenterError::ToolFailed { tool, code }) => {
            assert_eq!(tool, "zenity");
            assert_eq!(code, Some(1));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert_eq!(runner.programs(), vec!["zenity"]);
    assert!(console.is_empty());
}

#[test]
fn test_unknown_platform_prints_without_launching_tools() {
    for os in UNKNOWN_PLATFORMS {
        let (result, runner, console) = present(Platform::from_os(os), RecordingRunner::empty().with_tool("zenity"));

        assert_eq!(result.unwrap(), Presentation::Console, "platform {}", os);
        assert!(runner.invocations.is_empty(), "platform {}", os);
        assert_eq!(console, "Working directory:\n/home/dev/work space\n");
    }
}

#[test]
fn test_macos_runs_osascript_only() {
    let runner = RecordingRunner::empty().with_tool("osascript").with_tool("zenity");

    let (result, runner, console) = present(Platform::MacOs, runner);

    assert_eq!(
        result.unwrap(),
        Presentation::Dialog {
            tool: "osascript".to_string()
        }
    );
    assert_eq!(runner.programs(), vec!["osascript"]);
    assert!(console.is_empty());
}

#[test]
fn test_macos_cancelled_dialog_still_counts_as_shown() {
    let runner = RecordingRunner::empty().with_exit("osascript", ToolExit::Failed { code: Some(1) });

    let (result, _, _) = present(Platform::MacOs, runner);

    assert_eq!(
        result.unwrap(),
        Presentation::Dialog {
            tool: "osascript".to_string()
        }
    );
}

#[test]
fn test_macos_without_osascript_is_an_error() {
    let (result, _, console) = present(Platform::MacOs, RecordingRunner::empty());

    assert!(matches!(result, Err(PresenterError::NoDisplayTool { .. })));
    assert!(console.is_empty());
}

#[test]
fn test_windows_runs_powershell_only() {
    let runner = RecordingRunner::empty().with_tool("powershell");

    let (result, runner, _) = present(Platform::Windows, runner);

    assert_eq!(
        result.unwrap(),
        Presentation::Dialog {
            tool: "powershell".to_string()
        }
    );
    assert_eq!(runner.programs(), vec!["powershell"]);
    assert!(runner.invocations[0].args.last().unwrap().contains("MessageBox"));
}

#[test]
fn test_windows_without_powershell_is_an_error() {
    let (result, runner, _) = present(Platform::Windows, RecordingRunner::empty());

    match result {
        Err(PresenterError::NoDisplayTool { tried }) => assert_eq!(tried, vec!["powershell"]),
        other => panic!("Unexpected result: {:?}", other),
    }
    assert_eq!(runner.programs(), vec!["powershell"]);
}

#[test]
fn test_epilogue_follows_every_successful_branch() {
    init_tracing();

    let cases = vec![
        (Platform::Linux, RecordingRunner::empty().with_tool("zenity")),
        (Platform::Linux, RecordingRunner::empty()),
        (Platform::MacOs, RecordingRunner::empty().with_tool("osascript")),
        (Platform::Windows, RecordingRunner::empty().with_tool("powershell")),
        (Platform::from_os("plan9"), RecordingRunner::empty()),
    ];

    for (platform, runner) in cases {
        let config = PresenterConfig::new()
            .pause(Duration::ZERO)
            .platform(platform.clone());
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        run(
            &config,
            &Message::working_directory("Test Rust", &PathBuf::from("/opt/demo")),
            runner,
            &mut input,
            &mut output,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(
            output.ends_with(&format!("{}\n{}", DIAGNOSTIC_LINE, EXIT_PROMPT)),
            "platform {}: {:?}",
            platform,
            output
        );
        assert_eq!(input.position(), 1, "platform {}", platform);
    }
}

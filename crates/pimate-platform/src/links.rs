use std::process::Command;

use pimate_common::web::{parse_http_url, Url};
use pimate_common::PlatformError;
use tracing::{debug, info};

/// Opens `url` with the host's default handler (usually the browser).
///
/// - macOS: `open`
/// - Windows: `cmd /C start`
/// - Other Unix: `xdg-open`
///
/// Only absolute `http`/`https` URLs are accepted. The handler is invoked
/// once; a missing handler or a non-zero exit is reported, not retried.
pub fn open_url(url: &str) -> Result<(), PlatformError> {
    let url = parse_http_url(url).map_err(PlatformError::InvalidUrl)?;
    debug!(url = %url, "opening url");
    platform_open(&url)?;
    info!(url = %url, "url handed to system handler");
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_open(url: &Url) -> Result<(), PlatformError> {
    run_handler(Command::new("open").arg(url.as_str()), "open")
}

#[cfg(target_os = "windows")]
fn platform_open(url: &Url) -> Result<(), PlatformError> {
    // The empty string is the window title `start` expects before the target.
    run_handler(
        Command::new("cmd").args(["/C", "start", "", url.as_str()]),
        "cmd /C start",
    )
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_open(url: &Url) -> Result<(), PlatformError> {
    run_handler(Command::new("xdg-open").arg(url.as_str()), "xdg-open")
}

#[cfg(not(any(unix, target_os = "windows")))]
fn platform_open(_url: &Url) -> Result<(), PlatformError> {
    Err(PlatformError::NotSupported(
        "opening urls on this platform".into(),
    ))
}

#[cfg(any(unix, target_os = "windows"))]
fn run_handler(command: &mut Command, name: &str) -> Result<(), PlatformError> {
    let output = command
        .output()
        .map_err(|e| PlatformError::OpenUrl(format!("failed to run {name}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PlatformError::OpenUrl(format!(
            "{name} failed ({}): {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_url_before_spawning() {
        let err = open_url("www.dropbox.com").unwrap_err();
        assert!(matches!(err, PlatformError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_non_http_schemes() {
        for raw in ["file:///etc/passwd", "javascript:alert(1)", "ftp://host/x"] {
            assert!(
                matches!(open_url(raw), Err(PlatformError::InvalidUrl(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(open_url("   "), Err(PlatformError::InvalidUrl(_))));
    }

    #[test]
    fn invalid_url_message_names_the_input() {
        let err = open_url("not a url").unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn missing_handler_is_open_url_error() {
        let err = run_handler(
            &mut Command::new("pimate-definitely-not-a-binary"),
            "pimate-definitely-not-a-binary",
        )
        .unwrap_err();
        assert!(matches!(err, PlatformError::OpenUrl(_)));
    }

    #[cfg(unix)]
    #[test]
    fn failing_handler_is_open_url_error() {
        let err = run_handler(&mut Command::new("false"), "false").unwrap_err();
        match err {
            PlatformError::OpenUrl(msg) => assert!(msg.starts_with("false failed")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

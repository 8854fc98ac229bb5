//! Opens external pages in the system browser.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Program and leading arguments of the platform's URL opener.
pub fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}

/// Only web pages are handed to the opener.
pub fn is_openable(url: &str) -> bool {
    let url = url.trim();
    (url.starts_with("http://") || url.starts_with("https://")) && !url.contains(char::is_whitespace)
}

/// Launch the browser without waiting for it; output is discarded so it
/// cannot scribble over the TUI.
pub fn open_url(url: &str) -> Result<()> {
    if !is_openable(url) {
        anyhow::bail!("refusing to open {:?}", url);
    }
    let (program, args) = opener();
    Command::new(program)
        .args(args)
        .arg(url.trim())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to run {}", program))?;
    tracing::info!(url, "opened external link");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_web_urls_are_openable() {
        assert!(is_openable("https://mars-viewer-nasa-1.onrender.com/"));
        assert!(is_openable("http://localhost:8000/nasa_lunar.html"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("https://example.com/a b"));
        assert!(!is_openable(""));
    }

    #[test]
    fn test_rejected_url_is_an_error() {
        assert!(open_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_opener_matches_platform() {
        let (program, _) = opener();
        #[cfg(target_os = "linux")]
        assert_eq!(program, "xdg-open");
        #[cfg(target_os = "macos")]
        assert_eq!(program, "open");
        #[cfg(target_os = "windows")]
        assert_eq!(program, "cmd");
        assert!(!program.is_empty());
    }
}

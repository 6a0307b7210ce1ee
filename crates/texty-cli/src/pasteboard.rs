//! Clipboard access behind an injected capability.
//!
//! The converter itself never touches the pasteboard; this module is the
//! only place that does. On macOS, reading goes through `pbpaste` and
//! writing through `pbcopy` (plain text) or an `osascript` JavaScript
//! bridge (the custom binary type, which the command-line tools cannot
//! set). Other platforms get an implementation that always errors, so
//! file input and `--dry-run` keep working everywhere.

use anyhow::Result;

/// UTI under which Chromium-based apps read web custom data
pub const WEB_CUSTOM_DATA_TYPE: &str = "org.chromium.web-custom-data";

/// Capability for reading and writing the shared system clipboard
pub trait Pasteboard {
    /// Read the HTML representation currently on the clipboard
    fn read_html(&self) -> Result<String>;

    /// Replace the clipboard with plain text only
    fn write_text(&self, plain_text: &str) -> Result<()>;

    /// Replace the clipboard with the rich payload plus a plain-text
    /// fallback for consumers that cannot read the custom type
    fn write_rich(&self, payload: &[u8], plain_text: &str) -> Result<()>;
}

/// The platform's pasteboard implementation
pub fn system() -> impl Pasteboard {
    SystemPasteboard
}

struct SystemPasteboard;

#[cfg(target_os = "macos")]
mod macos {
    use std::io::Write;
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context, Result};

    use super::{Pasteboard, SystemPasteboard, WEB_CUSTOM_DATA_TYPE};

    /// JXA program: argv[0] = payload file, argv[1] = plain-text fallback.
    const SET_RICH_SCRIPT: &str = r#"
function run(argv) {
    ObjC.import('AppKit');
    const pb = $.NSPasteboard.generalPasteboard;
    pb.clearContents;
    pb.setStringForType($(argv[1]), $.NSPasteboardTypeString);
    const data = $.NSData.dataWithContentsOfFile($(argv[0]));
    pb.setDataForType(data, $(argv[2]));
}
"#;

    impl Pasteboard for SystemPasteboard {
        fn read_html(&self) -> Result<String> {
            let output = Command::new("pbpaste")
                .args(["-prefer", "public.html"])
                .output()
                .context("failed to run pbpaste")?;
            if !output.status.success() {
                bail!("pbpaste exited with {}", output.status);
            }

            let html = String::from_utf8(output.stdout)
                .context("clipboard HTML is not valid UTF-8")?;
            if html.trim().is_empty() {
                bail!("the clipboard holds no HTML content");
            }
            Ok(html)
        }

        fn write_text(&self, plain_text: &str) -> Result<()> {
            let mut child = Command::new("pbcopy")
                .stdin(Stdio::piped())
                .spawn()
                .context("failed to run pbcopy")?;
            child
                .stdin
                .take()
                .context("pbcopy stdin unavailable")?
                .write_all(plain_text.as_bytes())?;
            let status = child.wait()?;
            if !status.success() {
                bail!("pbcopy exited with {status}");
            }
            Ok(())
        }

        fn write_rich(&self, payload: &[u8], plain_text: &str) -> Result<()> {
            let mut file = tempfile::NamedTempFile::new()
                .context("failed to create payload temp file")?;
            file.write_all(payload)?;
            file.flush()?;

            let status = Command::new("osascript")
                .args(["-l", "JavaScript", "-e", SET_RICH_SCRIPT, "--"])
                .arg(file.path())
                .arg(plain_text)
                .arg(WEB_CUSTOM_DATA_TYPE)
                .status()
                .context("failed to run osascript")?;
            if !status.success() {
                bail!("osascript exited with {status}");
            }
            Ok(())
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod unsupported {
    use anyhow::{bail, Result};

    use super::{Pasteboard, SystemPasteboard};

    impl Pasteboard for SystemPasteboard {
        fn read_html(&self) -> Result<String> {
            bail!("clipboard access is only supported on macOS; pass a FILE argument instead");
        }

        fn write_text(&self, _plain_text: &str) -> Result<()> {
            bail!("clipboard access is only supported on macOS; use --dry-run to print instead");
        }

        fn write_rich(&self, _payload: &[u8], _plain_text: &str) -> Result<()> {
            bail!("clipboard access is only supported on macOS; use --dry-run to print instead");
        }
    }
}

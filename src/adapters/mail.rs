use crate::domain::ports::MailHandoff;
use crate::utils::error::{Result, SiteError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Opens the URI with the desktop's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMailHandoff;

impl SystemMailHandoff {
    fn command(uri: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            cmd
        } else if cfg!(target_os = "windows") {
            // `cmd /C start` would split the URI at `&`.
            let mut cmd = Command::new("rundll32");
            cmd.args(["url.dll,FileProtocolHandler", uri]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl MailHandoff for SystemMailHandoff {
    fn hand_off(&mut self, mailto_uri: &str) -> Result<()> {
        let mut cmd = Self::command(mailto_uri);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The opener returns once the handler is launched; nothing is read back.
        let status = cmd.status().map_err(|e| SiteError::MailHandoffError {
            message: format!("could not launch mail handler: {}", e),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(SiteError::MailHandoffError {
                message: format!("mail handler exited with {}", status),
            })
        }
    }
}

/// Writes the URI to a stream instead of opening it.
pub struct PrintHandoff<W: Write> {
    out: W,
}

impl<W: Write> PrintHandoff<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MailHandoff for PrintHandoff<W> {
    fn hand_off(&mut self, mailto_uri: &str) -> Result<()> {
        writeln!(self.out, "{}", mailto_uri)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_handoff_writes_uri_line() {
        let mut handoff = PrintHandoff::new(Vec::new());
        handoff.hand_off("mailto:office@example.ca?subject=Hi").unwrap();
        assert_eq!(
            String::from_utf8(handoff.into_inner()).unwrap(),
            "mailto:office@example.ca?subject=Hi\n"
        );
    }
}

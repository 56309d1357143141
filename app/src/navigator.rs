use std::io::{self, Write};
use std::process::Stdio;
use std::thread;
use workflow::Navigator;

/// Hands the URL to the desktop's default browser.
///
/// The platform opener comes from `open::commands`, tried in order until
/// one starts.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_in_new_context(&self, url: &str) -> io::Result<()> {
        let mut last_err = None;
        for mut cmd in open::commands(url) {
            let spawned = cmd
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(mut child) => {
                    // reaped off-thread so a slow opener never holds up the prompt
                    thread::spawn(move || child.wait());
                    return Ok(());
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no URL opener available")))
    }
}

/// For headless sessions: prints the link for the user to follow.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open_in_new_context(&self, url: &str) -> io::Result<()> {
        let mut out = io::stdout();
        writeln!(out, "Open this link to pay: {url}")?;
        out.flush()
    }
}

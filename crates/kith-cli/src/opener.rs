//! Hands contact URIs to the desktop's default handler.

use std::io;
use std::process::{Command, Stdio};

use kith_core::actions::UrlOpener;

/// Launches the platform opener without waiting for it
#[derive(Debug, Clone, Copy)]
pub struct SystemOpener {
    dry_run: bool,
}

impl SystemOpener {
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, uri: &str) -> kith_core::Result<()> {
        if self.dry_run {
            tracing::debug!("Dry run: not opening {}", uri);
            return Ok(());
        }

        let (program, args) = opener_command(uri);
        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|error| {
                io::Error::new(
                    error.kind(),
                    format!("failed to launch `{program}` for {uri}: {error}"),
                )
                .into()
            })
    }
}

/// Program and arguments that open `uri` on this platform
pub fn opener_command(uri: &str) -> (&'static str, Vec<String>) {
    if cfg!(windows) {
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                uri.to_string(),
            ],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![uri.to_string()])
    } else {
        ("xdg-open", vec![uri.to_string()])
    }
}

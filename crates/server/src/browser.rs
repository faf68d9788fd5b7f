//! Launches the user's default browser once the server is up.

use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Platform command that hands a URL to the default browser.
fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        // The empty argument is the window title `start` expects first
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Open `url` in the default browser. Returns once the opener has been spawned.
pub fn open_url(url: &str) -> io::Result<()> {
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Spawn a task that waits `delay` and then opens `url`.
///
/// Failure to launch a browser is logged and otherwise ignored; the server
/// keeps running either way.
pub fn spawn_open(url: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match open_url(&url) {
            Ok(()) => info!("Opened {} in the default browser", url),
            Err(e) => warn!("Could not open a browser ({}); visit {} manually", e, url),
        }
    })
}

use std::{
    ffi::OsStr,
    io::Write,
    process::{Command, Stdio},
};

use tracing::{debug, warn};
use url::Url;
use visionaria_extern_contracts::navigation::NavigationService;

#[derive(Debug, Clone)]
pub struct NavigationServiceImpl {
    config: NavigationServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationServiceConfig {
    /// Hand the url to the platform's url opener (`xdg-open`, `open`,
    /// `start`) or to a custom command.
    Browser { opener: Option<Vec<String>> },
    /// Write the url to stdout, for headless environments.
    Stdout,
}

impl NavigationServiceImpl {
    pub fn new(config: NavigationServiceConfig) -> Self {
        Self { config }
    }
}

impl NavigationService for NavigationServiceImpl {
    fn open_new_window(&self, url: &Url) {
        match &self.config {
            NavigationServiceConfig::Browser { opener } => {
                let mut command = opener_command(opener.as_deref(), url);
                debug!(program = ?command.get_program(), "spawning url opener");

                let result = command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn();

                match result {
                    // reap the child in the background, its exit status is irrelevant
                    Ok(mut child) => {
                        std::thread::spawn(move || child.wait());
                    }
                    Err(err) => warn!("Failed to spawn url opener: {err}"),
                }
            }
            NavigationServiceConfig::Stdout => {
                let mut stdout = std::io::stdout().lock();
                if let Err(err) = writeln!(stdout, "{url}") {
                    warn!("Failed to write url to stdout: {err}");
                }
            }
        }
    }
}

fn opener_command(opener: Option<&[String]>, url: &Url) -> Command {
    if let Some((program, args)) = opener.and_then(|opener| opener.split_first()) {
        return command(program, args.iter().map(String::as_str), url);
    }

    if cfg!(target_os = "windows") {
        command("cmd", ["/C", "start", ""], url)
    } else if cfg!(target_os = "macos") {
        command("open", [], url)
    } else {
        command("xdg-open", [], url)
    }
}

fn command<'a>(
    program: impl AsRef<OsStr>,
    args: impl IntoIterator<Item = &'a str>,
    url: &Url,
) -> Command {
    let mut command = Command::new(program);
    command.args(args).arg(url.as_str());
    command
}

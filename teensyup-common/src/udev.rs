// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! One-shot installer for the Teensy udev rule file.
//!
//! The rule file grants non-root access to Teensy boards. Installing it is
//! the only operation here that changes system state, so it is guarded
//! three ways: an existing rule file is never overwritten, the live path
//! pauses briefly so the operator can abort, and callers opt in to the
//! live path at all (the default is a dry run that only downloads).

use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use indicatif::ProgressBar;
use log::{info, warn};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::process::{CommandRunner, SystemRunner};

/// Upstream rule file published by PJRC.
pub const RULES_URL: &str = "https://www.pjrc.com/teensy/00-teensy.rules";

/// System path the rule file is installed to.
pub const RULES_PATH: &str = "/etc/udev/rules.d/00-teensy.rules";

/// Network timeout for the rules download.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Default pause before the live install touches system state.
pub const DEFAULT_PREFLIGHT_DELAY: Duration = Duration::from_secs(3);

/// The three elevated install sub-steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UdevStep {
    /// Copy the rule file into place with root ownership and mode 0664.
    Install,
    /// Reload the udev rule database.
    ReloadRules,
    /// Re-trigger udev device events so the new rule takes effect.
    Trigger,
}

impl fmt::Display for UdevStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UdevStep::Install => "install",
            UdevStep::ReloadRules => "reload-rules",
            UdevStep::Trigger => "trigger",
        };
        f.write_str(name)
    }
}

/// Retrieves the rule file from a URL into a local destination.
pub trait RulesFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Fetcher backed by a blocking reqwest client.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl RulesFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Downloading {}", url));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = download(url, dest);
        spinner.finish_and_clear();
        result
    }
}

fn download(url: &str, dest: &Path) -> Result<()> {
    let failed = |reason: String| Error::DownloadFailed {
        url: url.to_string(),
        reason,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|e| failed(e.to_string()))?;
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| failed(e.to_string()))?;
    let body = response.bytes().map_err(|e| failed(e.to_string()))?;
    std::fs::write(dest, &body).map_err(|e| failed(e.to_string()))?;

    Ok(())
}

/// Downloads the Teensy udev rule file and installs it system-wide.
pub struct UdevInstaller<R: CommandRunner = SystemRunner, F: RulesFetcher = HttpFetcher> {
    runner: R,
    fetcher: F,
    rules_url: String,
    rules_path: PathBuf,
    preflight_delay: Duration,
}

impl UdevInstaller<SystemRunner, HttpFetcher> {
    /// Installer using the real process runner and HTTP fetcher.
    pub fn new() -> Self {
        Self::with_parts(SystemRunner, HttpFetcher)
    }
}

impl Default for UdevInstaller<SystemRunner, HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner, F: RulesFetcher> UdevInstaller<R, F> {
    /// Installer over explicit runner and fetcher implementations.
    pub fn with_parts(runner: R, fetcher: F) -> Self {
        Self {
            runner,
            fetcher,
            rules_url: RULES_URL.to_string(),
            rules_path: PathBuf::from(RULES_PATH),
            preflight_delay: DEFAULT_PREFLIGHT_DELAY,
        }
    }

    /// Override the download URL.
    pub fn rules_url(mut self, url: impl Into<String>) -> Self {
        self.rules_url = url.into();
        self
    }

    /// Override the install path.
    pub fn rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = path.into();
        self
    }

    /// Override the pause before the live install begins.
    pub fn preflight_delay(mut self, delay: Duration) -> Self {
        self.preflight_delay = delay;
        self
    }

    /// Download the rule file and, unless `dry_run`, install it.
    ///
    /// An already-present rule file is left untouched and reported as
    /// success: it may carry local customizations. In dry-run mode the
    /// download still happens but the privileged commands are only
    /// reported, never executed. The downloaded copy is removed in every
    /// path.
    pub fn install(&self, dry_run: bool) -> Result<()> {
        if self.rules_path.exists() {
            warn!(
                "{} already exists, leaving it untouched",
                self.rules_path.display()
            );
            return Ok(());
        }

        if !dry_run {
            info!(
                "installing udev rules to {} in {}s, press ctrl-c to abort",
                self.rules_path.display(),
                self.preflight_delay.as_secs()
            );
            thread::sleep(self.preflight_delay);
        }

        let downloaded = NamedTempFile::new().map_err(|e| Error::DownloadFailed {
            url: self.rules_url.clone(),
            reason: format!("cannot create temporary file: {}", e),
        })?;
        self.fetcher.fetch(&self.rules_url, downloaded.path())?;

        for (step, args) in self.privileged_steps(downloaded.path()) {
            if dry_run {
                info!("dry run, would execute: sudo {}", args.join(" "));
                continue;
            }
            info!("running: sudo {}", args.join(" "));
            if !self.runner.run_status("sudo", &args)? {
                return Err(Error::PrivilegedCommandFailed { step });
            }
        }

        Ok(())
    }

    /// Argument lists for the three `sudo` invocations, in execution order.
    fn privileged_steps(&self, downloaded: &Path) -> [(UdevStep, Vec<String>); 3] {
        let install = vec![
            "install".to_string(),
            "-o".to_string(),
            "root".to_string(),
            "-g".to_string(),
            "root".to_string(),
            "-m".to_string(),
            "0664".to_string(),
            downloaded.display().to_string(),
            self.rules_path.display().to_string(),
        ];
        let reload = vec![
            "udevadm".to_string(),
            "control".to_string(),
            "--reload-rules".to_string(),
        ];
        let trigger = vec!["udevadm".to_string(), "trigger".to_string()];

        [
            (UdevStep::Install, install),
            (UdevStep::ReloadRules, reload),
            (UdevStep::Trigger, trigger),
        ]
    }
}

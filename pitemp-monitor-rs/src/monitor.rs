//! The temperature polling loop.
//!
//! Every five seconds: read the core temperature, log it, and hand it to
//! the external display writer. Both steps tolerate failure — a bad read
//! substitutes 0.0, a failed writer invocation is logged and ignored —
//! so the loop only ever stops on an interrupt.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use tokio::process::Command;

use pitemp_cpu_thermal_rs::ThermalZone;

/// Default installed location of the display writer binary.
pub const DEFAULT_WRITER_PATH: &str = "/usr/local/bin/ssd1306-writer";

/// Seconds between polling iterations.
pub const POLL_INTERVAL_SECS: u64 = 5;

// ── Configuration ────────────────────────────────────────────────────────

/// Monitor configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Delay between iterations. Fixed sleep, no drift correction.
    pub poll_interval: Duration,
    /// Path to the display writer binary.
    pub writer_path: PathBuf,
    /// Invoke the writer through `sudo`. The writer needs root to open
    /// the I2C character device on a stock Pi.
    pub use_sudo: bool,
}

impl MonitorConfig {
    /// Build the configuration from the environment.
    ///
    /// * `PITEMP_WRITER` — writer binary path (default
    ///   `/usr/local/bin/ssd1306-writer`).
    /// * `PITEMP_NO_SUDO=1` — invoke the writer directly, without `sudo`.
    pub fn from_env() -> Self {
        let writer_path = std::env::var("PITEMP_WRITER")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_WRITER_PATH));
        let use_sudo = std::env::var("PITEMP_NO_SUDO").map(|v| v != "1").unwrap_or(true);
        Self {
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            writer_path,
            use_sudo,
        }
    }
}

// ── Formatting ───────────────────────────────────────────────────────────

/// Format a temperature for the panel, one decimal place: `TEMP: 45.2 C`.
pub fn format_display_text(celsius: f32) -> String {
    format!("TEMP: {celsius:.1} C")
}

// ── Monitor ──────────────────────────────────────────────────────────────

/// The polling loop: thermal zone in, display writer out.
pub struct Monitor {
    zone: ThermalZone,
    config: MonitorConfig,
}

impl Monitor {
    pub fn new(zone: ThermalZone, config: MonitorConfig) -> Self {
        Self { zone, config }
    }

    /// Read the current temperature, substituting 0.0 on any failure.
    ///
    /// A missing or malformed thermal file is logged at warn level and
    /// never aborts the loop.
    pub fn sample(&self) -> f32 {
        match self.zone.read_celsius() {
            Ok(celsius) => celsius,
            Err(error) => {
                tracing::warn!(error = %error, "temperature read failed, substituting 0.0");
                0.0
            }
        }
    }

    /// Invoke the display writer with the formatted text.
    ///
    /// A spawn failure or non-zero exit status is logged and ignored; the
    /// writer's output is not consumed.
    pub async fn update_display(&self, text: &str) {
        let mut command = if self.config.use_sudo {
            let mut c = Command::new("sudo");
            c.arg(&self.config.writer_path);
            c
        } else {
            Command::new(&self.config.writer_path)
        };
        command.arg(text);

        match command.status().await {
            Ok(status) if status.success() => {}
            Ok(status) => {
                tracing::warn!(status = %status, "display writer exited with failure");
            }
            Err(error) => {
                tracing::warn!(error = %error, "failed to launch display writer");
            }
        }
    }

    /// Run the polling loop until `shutdown` resolves.
    ///
    /// # Control flow
    ///
    /// 1. Check `shutdown`; a pre-resolved future stops the loop before
    ///    the first sample.
    /// 2. Read the temperature (0.0 on failure) and log it.
    /// 3. Invoke the display writer; failures are logged and ignored.
    /// 4. Sleep the fixed interval, racing the sleep against `shutdown`.
    ///
    /// After `shutdown` resolves no further hardware or process calls are
    /// made.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                () = std::future::ready(()) => {}
            }

            let celsius = self.sample();
            tracing::info!("current core temperature: {celsius:.1} °C");
            self.update_display(&format_display_text(celsius)).await;

            tokio::select! {
                biased;
                () = &mut shutdown => break,
                () = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

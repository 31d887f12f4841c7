//! pitemp-monitor
//!
//! Polls the Raspberry Pi core temperature every five seconds and forwards
//! it to the OLED display writer:
//!
//! 1. Read `/sys/class/thermal/thermal_zone0/temp` (millidegrees → °C;
//!    0.0 substituted on any failure).
//! 2. Format the reading as `TEMP: 45.2 C`.
//! 3. Invoke `sudo ssd1306-writer "TEMP: 45.2 C"`; a non-zero exit is
//!    logged and ignored.
//! 4. Sleep five seconds and repeat, until Ctrl-C.
//!
//! Runs single-threaded; the runtime exists only to race the sleep timer
//! against the interrupt signal.

mod monitor;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use pitemp_cpu_thermal_rs::ThermalZone;

use crate::monitor::{Monitor, MonitorConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitemp_monitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MonitorConfig::from_env();
    tracing::info!(
        writer = %config.writer_path.display(),
        "monitoring CPU temperature, press Ctrl-C to stop"
    );

    let monitor = Monitor::new(ThermalZone::new(), config);
    monitor
        .run(async {
            // If the handler cannot be installed there is no interrupt
            // path; never resolve instead of stopping the loop dead.
            match tokio::signal::ctrl_c().await {
                Ok(()) => {}
                Err(error) => {
                    tracing::error!(error = %error, "failed to listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await;

    tracing::info!("monitor stopped, goodbye");
}

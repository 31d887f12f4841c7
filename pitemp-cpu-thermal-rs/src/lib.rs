//! CPU core temperature reader.
//!
//! The Raspberry Pi kernel exposes the SoC temperature as an integer in
//! milli-degrees Celsius through a sysfs file
//! (`/sys/class/thermal/thermal_zone0/temp`, e.g. `45123` for 45.123 °C).
//! [`ThermalZone`] reads and parses that file; the conversion itself is a
//! plain division by 1000.

use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Default thermal zone file on a Raspberry Pi.
pub const DEFAULT_THERMAL_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Errors that can occur while reading the thermal zone.
#[derive(Debug, thiserror::Error)]
pub enum ThermalError {
    /// The sysfs file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content was not an integer millidegree value.
    #[error("malformed temperature value {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Convert a raw millidegree reading to degrees Celsius.
///
/// For all raw inputs `N` the result equals `N / 1000` within f32
/// rounding.
pub fn millidegrees_to_celsius(raw: i64) -> f32 {
    raw as f32 / 1000.0
}

/// Handle to a kernel thermal zone sysfs file.
///
/// # Example
///
/// ```no_run
/// use pitemp_cpu_thermal_rs::ThermalZone;
///
/// let zone = ThermalZone::new();
/// let celsius = zone.read_celsius()?;
/// println!("core temperature: {celsius:.1} °C");
/// # Ok::<(), pitemp_cpu_thermal_rs::ThermalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ThermalZone {
    path: PathBuf,
}

impl ThermalZone {
    /// Handle to the default Raspberry Pi thermal zone.
    pub fn new() -> Self {
        Self::with_path(DEFAULT_THERMAL_PATH)
    }

    /// Handle to an alternate thermal zone file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The sysfs path this zone reads from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the current core temperature in degrees Celsius.
    ///
    /// # Errors
    /// * [`ThermalError::Io`] if the file cannot be read.
    /// * [`ThermalError::Parse`] if the content is not an integer.
    pub fn read_celsius(&self) -> Result<f32, ThermalError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| ThermalError::Io {
            path: self.path.clone(),
            source,
        })?;
        let millidegrees: i64 = raw.trim().parse().map_err(|source| ThermalError::Parse {
            value: raw.trim().to_owned(),
            source,
        })?;
        Ok(millidegrees_to_celsius(millidegrees))
    }
}

impl Default for ThermalZone {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn zone_with_content(content: &str) -> (tempfile::TempDir, ThermalZone) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, ThermalZone::with_path(path))
    }

    #[test]
    fn reads_millidegrees_as_celsius() {
        let (_dir, zone) = zone_with_content("45123\n");
        assert_eq!(zone.read_celsius().unwrap(), 45.123);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let (_dir, zone) = zone_with_content("  38000 \n");
        assert_eq!(zone.read_celsius().unwrap(), 38.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let zone = ThermalZone::with_path("/nonexistent/thermal_zone99/temp");
        assert!(matches!(
            zone.read_celsius(),
            Err(ThermalError::Io { .. })
        ));
    }

    #[test]
    fn garbage_content_is_a_parse_error() {
        let (_dir, zone) = zone_with_content("not-a-number\n");
        assert!(matches!(
            zone.read_celsius(),
            Err(ThermalError::Parse { .. })
        ));
    }

    #[test]
    fn zero_reads_as_zero() {
        assert_eq!(millidegrees_to_celsius(0), 0.0);
    }

    proptest::proptest! {
        #[test]
        fn conversion_divides_by_one_thousand(raw in -200_000i64..200_000) {
            let celsius = millidegrees_to_celsius(raw);
            proptest::prop_assert!((celsius - raw as f32 / 1000.0).abs() < f32::EPSILON);
        }

        #[test]
        fn file_roundtrip_matches_conversion(raw in 0i64..150_000) {
            let (_dir, zone) = zone_with_content(&format!("{raw}\n"));
            proptest::prop_assert_eq!(zone.read_celsius().unwrap(), millidegrees_to_celsius(raw));
        }
    }
}

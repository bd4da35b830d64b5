//! Widget configuration: defaults, validation and on-disk loading.

use crate::model::EventSpec;
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Construction-time options, mirrored from the caller and never mutated
/// afterwards. Unset fields keep their defaults (English labels, Sunday
/// week start, today's month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub starts_on_monday: bool,
    /// Reference date for the initially shown month, e.g. "2024-03-15".
    /// Today when unset.
    pub start_date: Option<String>,
    /// Always supplied Sunday-first; the grid rotates them as needed.
    pub weekdays_short: Vec<String>,
    pub weekdays_long: Vec<String>,
    /// Always supplied January-first.
    pub months_short: Vec<String>,
    pub months_long: Vec<String>,
    pub events: Vec<EventSpec>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        let labels = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            starts_on_monday: false,
            start_date: None,
            weekdays_short: labels(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            weekdays_long: labels(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            months_short: labels(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            months_long: labels(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            events: Vec::new(),
        }
    }
}

impl CalendarOptions {
    /// Label arrays are indexed directly by weekday/month number, so their
    /// lengths are checked once here instead of on every render.
    pub fn validate(&self) -> Result<(), String> {
        check_len("weekdays_short", self.weekdays_short.len(), 7)?;
        check_len("weekdays_long", self.weekdays_long.len(), 7)?;
        check_len("months_short", self.months_short.len(), 12)?;
        check_len("months_long", self.months_long.len(), 12)?;
        Ok(())
    }

    /// Loads options from the user config file, falling back to defaults
    /// when none exists.
    pub fn load() -> Result<Self> {
        if let Some(proj) = ProjectDirs::from("com", "evcal", "evcal") {
            let path = proj.config_dir().join("config.toml");
            if path.exists() {
                return Self::from_path(&path);
            }
        }
        Ok(Self::default())
    }

    /// Reads a TOML options file, or JSON when the extension is `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let options: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON config at {}", path.display()))?
        } else {
            toml::from_str(&raw)
                .with_context(|| format!("invalid TOML config at {}", path.display()))?
        };
        options.validate().map_err(|e| anyhow!(e))?;
        Ok(options)
    }
}

fn check_len(field: &str, actual: usize, expected: usize) -> Result<(), String> {
    if actual != expected {
        return Err(format!(
            "{} must have {} entries, got {}",
            field, expected, actual
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CalendarOptions;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        assert!(CalendarOptions::default().validate().is_ok());
    }

    #[test]
    fn wrong_label_count_is_rejected() {
        let mut options = CalendarOptions::default();
        options.weekdays_short.pop();
        let err = options.validate().unwrap_err();
        assert!(err.contains("weekdays_short"));
        assert!(err.contains("7"));
    }

    #[test]
    fn toml_overrides_merge_onto_defaults() {
        let options: CalendarOptions = toml::from_str(
            r##"
            starts_on_monday = true
            start_date = "2024-03-15"

            [[events]]
            name = "Fair"
            start = "2024-03-02"
            end = "2024-03-04"
            color = "#00ff00"
            "##,
        )
        .unwrap();
        assert!(options.starts_on_monday);
        assert_eq!(options.start_date.as_deref(), Some("2024-03-15"));
        assert_eq!(options.events.len(), 1);
        assert_eq!(options.events[0].name, "Fair");
        // Untouched fields keep their defaults.
        assert_eq!(options.months_long[0], "January");
    }

    #[test]
    fn from_path_reads_toml_and_json() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml_file, "starts_on_monday = true").unwrap();
        let options = CalendarOptions::from_path(toml_file.path()).unwrap();
        assert!(options.starts_on_monday);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(json_file, "{{\"starts_on_monday\": true}}").unwrap();
        let options = CalendarOptions::from_path(json_file.path()).unwrap();
        assert!(options.starts_on_monday);
    }

    #[test]
    fn from_path_rejects_bad_labels() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "months_long = [\"January\"]").unwrap();
        assert!(CalendarOptions::from_path(file.path()).is_err());
    }
}

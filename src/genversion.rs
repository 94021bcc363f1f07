use std::io::{self, Write};

use chrono::{DateTime, Utc};
use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::library::httpdate::{current_version, format_http_date};
use crate::library::releasetag::gen_release_tag;
use crate::write::write_version_file;

/// A version string together with the release tag derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub release_tag: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        let release_tag = gen_release_tag(&version);
        VersionInfo {
            version,
            release_tag,
        }
    }

    /// Version for a release built at `time`.
    pub fn at(time: &DateTime<Utc>) -> Self {
        VersionInfo::new(format_http_date(time))
    }
}

/// Prints the version and release tag for easy git tagging.
pub fn print_version_info<W: Write>(out: &mut W, info: &VersionInfo) -> io::Result<()> {
    writeln!(out, "Version: \"{}\"", info.version)?;
    writeln!(out, "Release-Tag: {}", info.release_tag)?;
    Ok(())
}

/// Generates the version file for a release built now.
pub fn run(config: &Config) -> Result<VersionInfo> {
    let version = config.version_override.clone().unwrap_or_else(current_version);
    generate(config, VersionInfo::new(version))
}

/// Generates the version file as if the clock read `now`.
///
/// A fixed version in `config` takes precedence over `now`.
pub fn run_at(config: &Config, now: DateTime<Utc>) -> Result<VersionInfo> {
    let info = match &config.version_override {
        Some(version) => VersionInfo::new(version.as_str()),
        None => VersionInfo::at(&now),
    };
    generate(config, info)
}

fn generate(config: &Config, info: VersionInfo) -> Result<VersionInfo> {
    info!("Version: {}", info.version);

    write_version_file(&info, &config.template, &config.output_path)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = print_version_info(&mut handle, &info) {
        eprintln!("[WARN] Could not print version info: {}", e);
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::template::{Language, TemplateSettings};
    use crate::library::releasetag::release_tag_to_time;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            output_path: dir.join("version.go"),
            ..Config::default()
        }
    }

    #[test]
    fn version_info_derives_tag() {
        let info = VersionInfo::new("Mon, 02 Jan 2006 15:04:05 GMT");
        assert_eq!(info.release_tag, "RELEASE.Mon-02-Jan-2006-15-04-05-GMT");
    }

    #[test]
    fn prints_two_lines() {
        let mut out = Vec::new();
        print_version_info(&mut out, &VersionInfo::new("Mon, 02 Jan 2006 15:04:05 GMT")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Version: \"Mon, 02 Jan 2006 15:04:05 GMT\"\n\
             Release-Tag: RELEASE.Mon-02-Jan-2006-15-04-05-GMT\n"
        );
    }

    #[test]
    fn run_at_uses_clock_reading() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let now = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();

        let info = run_at(&config, now).unwrap();

        assert_eq!(info.version, "Mon, 02 Jan 2006 15:04:05 GMT");
        let written = fs::read_to_string(&config.output_path).unwrap();
        assert!(written.contains("const mcVersion = \"Mon, 02 Jan 2006 15:04:05 GMT\""));
        assert!(written.contains("const mcReleaseTag = \"RELEASE.Mon-02-Jan-2006-15-04-05-GMT\""));
    }

    #[test]
    fn override_beats_clock() {
        let dir = tempdir().unwrap();
        let config = Config {
            version_override: Some("V2".to_string()),
            template: TemplateSettings::for_language(Language::Rust),
            ..config_in(dir.path())
        };

        let info = run_at(&config, Utc::now()).unwrap();

        assert_eq!(info, VersionInfo::new("V2"));
        let written = fs::read_to_string(&config.output_path).unwrap();
        assert!(written.contains("pub const VERSION: &str = \"V2\";"));
    }

    #[test]
    fn run_stamps_the_current_time() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let before = Utc::now().timestamp();

        let info = run(&config).unwrap();

        let stamped = release_tag_to_time(&info.release_tag).unwrap().timestamp();
        assert!(stamped >= before - 1 && stamped <= Utc::now().timestamp());
        assert_eq!(info, VersionInfo::new(info.version.clone()));
        let written = fs::read_to_string(&config.output_path).unwrap();
        assert!(written.contains(&format!("const mcVersion = \"{}\"\n", info.version)));
    }

    #[test]
    fn run_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let config = Config {
            output_path: dir.path().join("missing").join("version.go"),
            ..Config::default()
        };
        assert!(run(&config).is_err());
    }
}

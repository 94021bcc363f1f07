use std::path::PathBuf;

use clap::Parser;

use crate::library::log::LogMode;
use crate::library::template::{Language, TemplateSettings};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

// CONFIGURATION //

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_path: PathBuf,
    pub template: TemplateSettings,
    /// Fixed version string; the build clock is used when absent.
    pub version_override: Option<String>,
    pub log_mode: LogMode,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let output_path = Language::Go.default_output();
        let log_path = log_path_for(&output_path);
        Config {
            output_path,
            template: TemplateSettings::default(),
            version_override: None,
            log_mode: LogMode::None,
            log_path,
        }
    }
}

/// Generate the version file embedded in release builds
#[derive(Parser, Debug)]
#[command(name = "genversion", version = LONG_VERSION, long_about = None, after_help = copyright_notice())]
pub struct Cli {
    /// Output file (default: version.go, or version.rs with --lang rust)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Template flavor: go, rust
    #[arg(long, value_name = "LANG", default_value = "go")]
    pub lang: Language,

    /// Go package clause of the generated file
    #[arg(long, value_name = "NAME", default_value = "main")]
    pub package: String,

    /// Name of the version constant (default: mcVersion, or VERSION for rust)
    #[arg(long, value_name = "NAME")]
    pub version_const: Option<String>,

    /// Name of the release tag constant (default: mcReleaseTag, or RELEASE_TAG for rust)
    #[arg(long, value_name = "NAME")]
    pub release_tag_const: Option<String>,

    /// Use this version string instead of the current UTC time
    #[arg(long, value_name = "STRING")]
    pub version_string: Option<String>,

    /// Log output: none, file, console, both
    #[arg(short, long, value_name = "MODE", default_value = "none")]
    pub log: LogMode,

    /// Log file (default: the output path with a .log extension)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

pub fn parse_arguments() -> Result<Config, String> {
    Config::from_cli(Cli::parse())
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Config, String> {
        let language = cli.lang;
        let output_path = cli.output.unwrap_or_else(|| language.default_output());

        let template = TemplateSettings {
            language,
            package: cli.package,
            version_const: cli
                .version_const
                .unwrap_or_else(|| language.default_version_const().to_string()),
            release_tag_const: cli
                .release_tag_const
                .unwrap_or_else(|| language.default_release_tag_const().to_string()),
        };

        for (flag, name, keywords) in [
            ("--package", &template.package, Language::Go),
            ("--version-const", &template.version_const, language),
            ("--release-tag-const", &template.release_tag_const, language),
        ] {
            if !is_identifier(name) {
                return Err(format!("Invalid value for {}: {:?} is not an identifier", flag, name));
            }
            if keywords.is_keyword(name) {
                return Err(format!(
                    "Invalid value for {}: {:?} is a {} keyword",
                    flag, name, keywords
                ));
            }
        }

        if template.version_const == template.release_tag_const {
            return Err(format!(
                "--version-const and --release-tag-const must differ (both are {})",
                template.version_const
            ));
        }

        let log_path = cli.log_file.unwrap_or_else(|| log_path_for(&output_path));

        Ok(Config {
            output_path,
            template,
            version_override: cli.version_string,
            log_mode: cli.log,
            log_path,
        })
    }
}

fn log_path_for(output_path: &std::path::Path) -> PathBuf {
    let mut path = output_path.to_path_buf();
    path.set_extension("log");
    path
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn copyright_notice() -> String {
    format!(
        "© {} {} - Licensed under {}",
        BUILD_YEAR,
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Config, String> {
        let cli = Cli::try_parse_from(std::iter::once("genversion").chain(args.iter().copied()))
            .map_err(|e| e.to_string())?;
        Config::from_cli(cli)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_is_the_default_config() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
        assert_eq!(Config::default().output_path, PathBuf::from("version.go"));
        assert_eq!(Config::default().log_path, PathBuf::from("version.log"));
    }

    #[test]
    fn rust_flavor_changes_defaults() {
        let config = parse(&["--lang", "rust"]).unwrap();
        assert_eq!(config.output_path, PathBuf::from("version.rs"));
        assert_eq!(config.template.version_const, "VERSION");
        assert_eq!(config.template.release_tag_const, "RELEASE_TAG");
    }

    #[test]
    fn explicit_values_win() {
        let config = parse(&[
            "-o",
            "out/v.go",
            "--package",
            "cmd",
            "--version-const",
            "Version",
            "--release-tag-const",
            "ReleaseTag",
            "--version-string",
            "V1",
            "--log",
            "both",
        ])
        .unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/v.go"));
        assert_eq!(config.log_path, PathBuf::from("out/v.log"));
        assert_eq!(config.template.package, "cmd");
        assert_eq!(config.template.version_const, "Version");
        assert_eq!(config.version_override.as_deref(), Some("V1"));
        assert_eq!(config.log_mode, LogMode::Both);
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert!(parse(&["--version-const", "1abc"]).is_err());
        assert!(parse(&["--package", "my-pkg"]).is_err());
        assert!(parse(&["--version-const", "X", "--release-tag-const", "X"]).is_err());
    }

    #[test]
    fn rejects_keywords_of_the_selected_language() {
        assert!(parse(&["--lang", "rust", "--version-const", "fn"]).is_err());
        assert!(parse(&["--release-tag-const", "func"]).is_err());
        assert!(parse(&["--package", "func"]).is_err());
        // Only reserved in the other flavor.
        assert!(parse(&["--version-const", "fn"]).is_ok());
        assert!(parse(&["--lang", "rust", "--version-const", "func"]).is_ok());
    }

    #[test]
    fn rejects_unknown_language_and_log_mode() {
        assert!(parse(&["--lang", "python"]).is_err());
        assert!(parse(&["--log", "syslog"]).is_err());
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("mcVersion"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a b"));
    }
}

// library/template.rs

//! The fixed template of the generated version file.
//!
//! Two flavors exist: a Go file (the historical `version.go` consumed by the
//! release build) and a Rust file meant for `include!`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::VersionInfo;

const HEADER: &str = "// --------  DO NOT EDIT --------\n\
                      // This file is autogenerated by genversion during the release process.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Go,
    Rust,
}

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

// Strict and reserved keywords as of edition 2024.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
    "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
    "yield",
];

impl Language {
    /// Whether `name` is a keyword and so cannot name a constant or package.
    pub fn is_keyword(self, name: &str) -> bool {
        let keywords = match self {
            Language::Go => GO_KEYWORDS,
            Language::Rust => RUST_KEYWORDS,
        };
        keywords.contains(&name)
    }

    pub fn default_output(self) -> PathBuf {
        match self {
            Language::Go => PathBuf::from("version.go"),
            Language::Rust => PathBuf::from("version.rs"),
        }
    }

    pub fn default_version_const(self) -> &'static str {
        match self {
            Language::Go => "mcVersion",
            Language::Rust => "VERSION",
        }
    }

    pub fn default_release_tag_const(self) -> &'static str {
        match self {
            Language::Go => "mcReleaseTag",
            Language::Rust => "RELEASE_TAG",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(format!("Invalid language: {} (use: go, rust)", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Go => write!(f, "go"),
            Language::Rust => write!(f, "rust"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub language: Language,
    /// Go package clause; ignored for Rust.
    pub package: String,
    pub version_const: String,
    pub release_tag_const: String,
}

impl TemplateSettings {
    pub fn for_language(language: Language) -> Self {
        TemplateSettings {
            language,
            package: "main".to_string(),
            version_const: language.default_version_const().to_string(),
            release_tag_const: language.default_release_tag_const().to_string(),
        }
    }
}

impl Default for TemplateSettings {
    fn default() -> Self {
        TemplateSettings::for_language(Language::Go)
    }
}

/// Renders the version file for `info`.
pub fn render(info: &VersionInfo, settings: &TemplateSettings) -> String {
    let version = quote(&info.version, settings.language);
    let release_tag = quote(&info.release_tag, settings.language);

    let mut out = String::from(HEADER);
    match settings.language {
        Language::Go => {
            out.push_str(&format!("\npackage {}\n\n", settings.package));
            out.push_str(&format!("const {} = {}\n", settings.version_const, version));
            out.push_str(&format!("const {} = {}\n", settings.release_tag_const, release_tag));
        }
        Language::Rust => {
            out.push('\n');
            out.push_str(&format!("pub const {}: &str = {};\n", settings.version_const, version));
            out.push_str(&format!(
                "pub const {}: &str = {};\n",
                settings.release_tag_const, release_tag
            ));
        }
    }
    out
}

// Control characters are escaped so the literal stays on one line.
// `\xNN` is valid in both languages up to 0x7F; C1 controls use the
// language's unicode escape.
fn quote(value: &str, language: Language) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() => match language {
                Language::Go => out.push_str(&format!("\\u{:04x}", c as u32)),
                Language::Rust => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            },
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

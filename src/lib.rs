
// CONFIGURATION //

pub mod config;
pub use config::{Cli, Config, parse_arguments};

// ERRORS //

pub mod error;
pub use error::{GenVersionError, Result};

// TIME FORMAT, RELEASE TAG, TEMPLATE AND LOGGING //

pub mod library;
pub use library::httpdate::{HTTP_TIME_FORMAT, current_version, format_http_date};
pub use library::releasetag::{gen_release_tag, release_tag_to_time};
pub use library::template::{Language, TemplateSettings};

// WRITING THE VERSION FILE //

pub mod write;
pub use write::write_version_file;

// GENERATING A VERSION //

pub mod genversion;
pub use genversion::{VersionInfo, print_version_info, run, run_at};

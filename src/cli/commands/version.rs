//! Version information display.

use serde_json::json;

use crate::catalog::chapters;
use crate::cli::args::{OutputFormat, VersionArgs};

/// Print version information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} ({} chapters)", chapters::all().len());
        }
        OutputFormat::Json => {
            let info = json!({
                "name": name,
                "version": version,
                "chapters": chapters::all().len(),
            });
            println!("{info}");
        }
    }
}

//! Schema of the optional `freezeup.yml` project file.

use serde::Deserialize;

/// Project-level overrides read from `freezeup.yml`.
///
/// Every key is optional; anything left out keeps the built-in default.
///
/// ```yaml
/// script: report.py
/// packages: [pandas, matplotlib, seaborn, numpy]
/// output_dir: dist
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    /// Script to freeze, relative to the working directory.
    pub script: Option<String>,

    /// Python packages the script imports, in install order.
    pub packages: Option<Vec<String>>,

    /// Directory PyInstaller writes the executable into.
    pub output_dir: Option<String>,

    /// Where to download `get-pip.py` from when pip is missing.
    pub bootstrap_url: Option<String>,
}

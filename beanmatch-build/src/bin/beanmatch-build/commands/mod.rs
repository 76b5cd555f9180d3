pub mod check;
pub mod generate;

use beanmatch_build::{BeanmatchConfig, MethodNaming};
use clap::Args;
use std::path::{Path, PathBuf};

/// Overrides for the `beanmatch.toml` settings, shared by all commands
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Source directory to scan, relative to the project root (repeatable)
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dirs: Vec<PathBuf>,

    /// Directory generated matchers are written below
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only generate for this module and its submodules, e.g. crate::models (repeatable)
    #[arg(long = "package", value_name = "MODULE")]
    pub packages: Vec<String>,

    /// Method naming convention
    #[arg(long, value_enum)]
    pub naming: Option<MethodNaming>,
}

impl SourceArgs {
    /// The loaded configuration with command line overrides applied.
    pub fn apply(&self, mut config: BeanmatchConfig) -> BeanmatchConfig {
        if !self.source_dirs.is_empty() {
            config.scan.source_dirs = self.source_dirs.iter().map(|dir| dir.display().to_string()).collect();
        }
        if let Some(output_dir) = &self.output_dir {
            config.generator.output_dir = output_dir.display().to_string();
        }
        if !self.packages.is_empty() {
            config.scan.packages.clone_from(&self.packages);
        }
        if let Some(naming) = self.naming {
            config.generator.naming = naming;
        }
        config
    }
}

/// `path` relative to the project root when it lies inside it.
pub fn display_path(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root).unwrap_or(path).display().to_string()
}

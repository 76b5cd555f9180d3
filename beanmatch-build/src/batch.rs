//! Batch generation over every struct discovered in the configured sources.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BeanmatchConfig;
use crate::descriptor::TypeDescriptor;
use crate::emitter::DEFAULT_RUNTIME_CRATE;
use crate::generator::MatcherClassGenerator;
use crate::naming::MethodNaming;
use crate::provenance::{self, DEFAULT_GENERATOR_NAME};
use crate::scanner::scan_directory;

const CRATE_ROOT: &str = "crate";

/// Builder for configuring and running matcher generation.
pub struct MatcherGenerator {
    scan_paths: Vec<PathBuf>,
    packages: Vec<String>,
    /// `packages` came from a config file and give way to explicit `package()` calls.
    packages_from_config: bool,
    output_dir: PathBuf,
    naming: MethodNaming,
    runtime_crate: String,
    generator_name: String,
}

impl MatcherGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            scan_paths: Vec::new(),
            packages: Vec::new(),
            packages_from_config: false,
            output_dir: PathBuf::from("src/generated"),
            naming: MethodNaming::default(),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
        }
    }

    /// Settings from a loaded `beanmatch.toml`, with paths resolved against `project_root`.
    pub fn from_config(config: &BeanmatchConfig, project_root: &Path) -> Self {
        let mut generator = Self::new()
            .output_dir(project_root.join(&config.generator.output_dir))
            .naming(config.generator.naming)
            .runtime_crate(&config.generator.runtime_crate)
            .generator_name(&config.generator.generator_name);
        for dir in &config.scan.source_dirs {
            generator = generator.scan_path(project_root.join(dir));
        }
        generator.packages = config.scan.packages.clone();
        generator.packages_from_config = true;
        generator
    }

    /// Add a crate source directory to scan for structs.
    ///
    /// Can be called multiple times to scan multiple directories.
    pub fn scan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scan_paths.push(path.into());
        self
    }

    /// Restrict generation to a module and its submodules, e.g. `crate::models`.
    ///
    /// Can be called multiple times. The first call replaces packages loaded
    /// by [`from_config`](Self::from_config). Default: the whole crate.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        if std::mem::take(&mut self.packages_from_config) {
            self.packages.clear();
        }
        self.packages.push(package.into());
        self
    }

    /// Set the root directory generated files are written below.
    ///
    /// Default: `src/generated`
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Default: [`MethodNaming::Snake`]
    pub fn naming(mut self, naming: MethodNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Default: `::beanmatch`
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// Default: `beanmatch-build`
    pub fn generator_name(mut self, name: impl Into<String>) -> Self {
        self.generator_name = name.into();
        self
    }

    /// All types matchers would be generated for, sorted by qualified name.
    pub fn discover(&self) -> Result<Vec<TypeDescriptor>> {
        // Default to scanning "src/" if no paths specified
        let scan_paths = if self.scan_paths.is_empty() {
            vec![PathBuf::from("src/")]
        } else {
            self.scan_paths.clone()
        };
        let packages = if self.packages.is_empty() {
            vec![CRATE_ROOT.to_string()]
        } else {
            self.packages.clone()
        };

        let mut all_types = Vec::new();
        for path in &scan_paths {
            let types = scan_directory(path, CRATE_ROOT, &packages)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            all_types.extend(types);
        }

        let mut seen = HashSet::new();
        all_types.retain(|ty| seen.insert(ty.qualified_name()));
        all_types.sort_by_key(|ty| ty.qualified_name());
        Ok(all_types)
    }

    /// Generate a matcher for every discovered type, returning the written files.
    pub fn run(self) -> Result<Vec<PathBuf>> {
        let types = self.discover()?;
        let generator = self.class_generator();

        let mut written = Vec::with_capacity(types.len());
        for ty in &types {
            let path = generator
                .generate_matcher_for(ty)
                .with_context(|| format!("Failed to generate matcher for {ty}"))?;
            written.push(path);
        }

        info!("Generated {} matchers in {}", written.len(), self.output_dir.display());
        Ok(written)
    }

    /// Compare generated files against what [`run`](Self::run) would write, without writing.
    pub fn check(&self) -> Result<Vec<CheckReport>> {
        let types = self.discover()?;
        let generator = self.class_generator();

        let mut reports = Vec::with_capacity(types.len());
        let mut expected = HashSet::new();
        for ty in &types {
            let artifact = generator
                .render_matcher_for(ty)
                .with_context(|| format!("Failed to render matcher for {ty}"))?;
            let status = match fs::read_to_string(&artifact.file_path) {
                Ok(existing) if existing == artifact.source_text => CheckStatus::UpToDate,
                Ok(_) => CheckStatus::Stale,
                Err(err) if err.kind() == io::ErrorKind::NotFound => CheckStatus::Missing,
                Err(err) => {
                    return Err(err).with_context(|| format!("Failed to read {}", artifact.file_path.display()));
                }
            };
            expected.insert(artifact.file_path.clone());
            reports.push(CheckReport {
                type_name: ty.qualified_name(),
                file: artifact.file_path,
                status,
            });
        }

        reports.extend(self.orphans(&expected)?);
        Ok(reports)
    }

    /// Files in the output directory carrying this generator's header that no
    /// discovered type accounts for.
    fn orphans(&self, expected: &HashSet<PathBuf>) -> Result<Vec<CheckReport>> {
        if !self.output_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut orphans = Vec::new();
        for entry in WalkDir::new(&self.output_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "rs"))
        {
            let path = entry.path();
            if expected.contains(path) {
                continue;
            }
            let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
            if let Some(origin) = provenance::read(&content)
                && origin.generated_by == self.generator_name
            {
                orphans.push(CheckReport {
                    type_name: origin.based_on,
                    file: path.to_path_buf(),
                    status: CheckStatus::Orphaned,
                });
            }
        }
        Ok(orphans)
    }

    fn class_generator(&self) -> MatcherClassGenerator {
        MatcherClassGenerator::new(&self.output_dir)
            .naming(self.naming)
            .runtime_crate(&self.runtime_crate)
            .generator_name(&self.generator_name)
    }
}

impl Default for MatcherGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one generated file relative to its source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    UpToDate,
    /// The file exists but differs from a fresh rendering.
    Stale,
    Missing,
    /// The type the file was generated from no longer exists.
    Orphaned,
}

impl CheckStatus {
    pub fn is_problem(self) -> bool {
        self != CheckStatus::UpToDate
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckStatus::UpToDate => "up to date",
            CheckStatus::Stale => "stale",
            CheckStatus::Missing => "missing",
            CheckStatus::Orphaned => "orphaned",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub type_name: String,
    pub file: PathBuf,
    pub status: CheckStatus,
}

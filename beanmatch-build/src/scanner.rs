//! Source file scanner discovering the structs to generate matchers for.

use anyhow::{Context, Result, ensure};
use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use syn::ext::IdentExt;
use syn::visit::{self, Visit};
use syn::{Attribute, ItemMod, ItemStruct};
use walkdir::{DirEntry, WalkDir};

use crate::descriptor::{ModulePath, TypeDescriptor};
use crate::provenance;

/// Scan `root` recursively for struct declarations.
///
/// `crate_prefix` is the module path of `root` itself, `crate` for a crate's
/// `src/`. Only types inside one of the `packages` module roots are returned.
pub fn scan_directory(root: &Path, crate_prefix: &str, packages: &[String]) -> Result<Vec<TypeDescriptor>> {
    ensure!(root.is_dir(), "{} is not a directory", root.display());

    let package_roots: Vec<ModulePath> = packages
        .iter()
        .filter(|package| !package.trim().is_empty())
        .map(|package| ModulePath::parse(package))
        .collect();
    if package_roots.is_empty() {
        return Ok(Vec::new());
    }

    let base = ModulePath::parse(crate_prefix);
    let mut types = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let file_path = entry.path();
        match scan_file(file_path, root, &base) {
            Ok(file_types) => types.extend(file_types),
            Err(err) => warn!("Skipping {}: {err:#}", file_path.display()),
        }
    }

    let mut matched = vec![false; package_roots.len()];
    types.retain(|ty| {
        let mut keep = false;
        for (package, hit) in package_roots.iter().zip(matched.iter_mut()) {
            if ty.module_path().starts_with(package) {
                *hit = true;
                keep = true;
            }
        }
        keep
    });
    for (package, hit) in package_roots.iter().zip(&matched) {
        if !hit {
            warn!("Package {package} matched no types under {}", root.display());
        }
    }

    // `lib.rs` and `main.rs` both map to the crate root
    let mut seen = HashSet::new();
    types.retain(|ty| seen.insert(ty.qualified_name()));
    types.sort_by_key(|ty| ty.qualified_name());

    Ok(types)
}

/// Hidden entries and cargo's `target/` directory.
fn is_excluded(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && name == "target")
}

/// Scan a single Rust file for struct declarations.
fn scan_file(file_path: &Path, base_path: &Path, base: &ModulePath) -> Result<Vec<TypeDescriptor>> {
    let content = fs::read_to_string(file_path).with_context(|| format!("Failed to read {}", file_path.display()))?;

    if let Some(origin) = provenance::read(&content) {
        debug!(
            "Skipping {} (generated by {} from {})",
            file_path.display(),
            origin.generated_by,
            origin.based_on
        );
        return Ok(Vec::new());
    }

    let syntax = syn::parse_file(&content).with_context(|| format!("Failed to parse {}", file_path.display()))?;

    let mut collector = StructCollector {
        file: file_path.to_path_buf(),
        module_path: compute_module_path(file_path, base_path, base),
        inline_modules: Vec::new(),
        found: Vec::new(),
    };
    collector.visit_file(&syntax);
    Ok(collector.found)
}

/// Collects module-level structs, descending into inline modules.
struct StructCollector {
    file: PathBuf,
    module_path: ModulePath,
    inline_modules: Vec<String>,
    found: Vec<TypeDescriptor>,
}

impl<'ast> Visit<'ast> for StructCollector {
    fn visit_item_mod(&mut self, item: &'ast ItemMod) {
        // `mod name;` declarations are reached through the directory walk
        if item.content.is_none() || is_cfg_test(&item.attrs) {
            return;
        }
        self.inline_modules.push(item.ident.unraw().to_string());
        visit::visit_item_mod(self, item);
        self.inline_modules.pop();
    }

    fn visit_item_struct(&mut self, item: &'ast ItemStruct) {
        if !item.generics.params.is_empty() || is_cfg_test(&item.attrs) {
            return;
        }
        let module_path = self
            .inline_modules
            .iter()
            .fold(self.module_path.clone(), |path, module| path.child(module));
        self.found.push(
            TypeDescriptor::new(item.ident.unraw().to_string(), module_path)
                .with_source(&self.file, self.inline_modules.clone()),
        );
    }

    // Items declared inside function bodies cannot be named from outside.
    fn visit_block(&mut self, _block: &'ast syn::Block) {}
}

/// Check for `#[cfg(test)]`.
fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg") && attr.parse_args::<syn::Ident>().is_ok_and(|ident| ident == "test")
    })
}

/// Compute the module path from a file path.
/// e.g., "src/models/user.rs" -> "crate::models::user"
fn compute_module_path(file_path: &Path, base_path: &Path, base: &ModulePath) -> ModulePath {
    let relative = file_path.strip_prefix(base_path).unwrap_or(file_path);

    let without_extension = relative.with_extension("");
    let mut parts: Vec<&str> = without_extension
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    // Remove "mod", "lib" or "main" from the end if present
    if let Some(last) = parts.last()
        && (*last == "mod" || *last == "lib" || *last == "main")
    {
        parts.pop();
    }

    parts.into_iter().fold(base.clone(), |path, part| path.child(part))
}

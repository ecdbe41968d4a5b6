//! Parsed source files handed to the generator.

use std::path::{Path, PathBuf};

use syn::ext::IdentExt;
use syn::visit::{self, Visit};
use syn::{Attribute, Block, Expr, ExprLit, ItemMod, Lit, Meta};
use tracing::{debug, instrument, warn};

use crate::error::{GenerateError, Result};
use crate::namespace::ModulePath;

/// One parsed Rust source file together with its file-scoped module path.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: Option<PathBuf>,
    module_path: ModulePath,
    syntax: syn::File,
}

impl SourceFile {
    /// Parses in-memory source text.
    pub fn parse(module_path: ModulePath, text: &str) -> Result<Self> {
        let syntax = syn::parse_file(text).map_err(|source| GenerateError::Parse {
            path: PathBuf::from(format!("<{module_path}>")),
            source,
        })?;

        Ok(Self {
            path: None,
            module_path,
            syntax,
        })
    }

    /// Reads and parses the file holding module `module_path`.
    pub fn load(path: &Path, module_path: ModulePath) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let syntax = syn::parse_file(&text).map_err(|source| GenerateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            module_path,
            syntax,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn module_path(&self) -> &ModulePath {
        &self.module_path
    }

    pub fn syntax(&self) -> &syn::File {
        &self.syntax
    }
}

/// Loads the crate whose sources live in `src_dir`.
///
/// Starts at `lib.rs`, or `main.rs` when there is no library target, and
/// follows `mod name;` declarations the way `rustc` does, including
/// `#[path]` overrides. Files that belong to other targets (`src/bin/`,
/// `main.rs` beside `lib.rs`) are never reached. Files are returned in
/// declaration order.
#[instrument]
pub fn discover_sources(src_dir: &Path) -> Result<Vec<SourceFile>> {
    let root = ["lib.rs", "main.rs"]
        .iter()
        .map(|name| src_dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| GenerateError::CrateRootNotFound(src_dir.to_path_buf()))?;

    let mut sources = Vec::new();
    load_module(&root, ModulePath::root(), src_dir, &mut sources)?;

    debug!(count = sources.len(), root = %root.display(), "Discovered source files");
    Ok(sources)
}

/// Loads `file` as `module_path`, then every module file it declares.
///
/// `child_dir` is where `mod name;` items at the top of `file` are looked up.
fn load_module(
    file: &Path,
    module_path: ModulePath,
    child_dir: &Path,
    sources: &mut Vec<SourceFile>,
) -> Result<()> {
    let source = SourceFile::load(file, module_path)?;

    let mut declared = Declarations {
        module: source.module_path().clone(),
        dir: child_dir.to_path_buf(),
        file_dir: file.parent().map(Path::to_path_buf).unwrap_or_default(),
        inline_depth: 0,
        found: Vec::new(),
    };
    declared.visit_file(source.syntax());
    let found = declared.found;
    sources.push(source);

    for declaration in found {
        let Some(path) = declaration.path else {
            warn!(module = %declaration.module, "No source file for module; skipping");
            continue;
        };
        let child_dir = if declaration.mod_rs {
            path.parent().map(Path::to_path_buf).unwrap_or_default()
        } else {
            path.with_extension("")
        };
        load_module(&path, declaration.module, &child_dir, sources)?;
    }
    Ok(())
}

/// An out-of-line `mod name;` item and the file that backs it.
struct Declaration {
    module: ModulePath,
    path: Option<PathBuf>,
    /// Children of `mod.rs` and `#[path]` files live beside the file.
    mod_rs: bool,
}

struct Declarations {
    module: ModulePath,
    dir: PathBuf,
    file_dir: PathBuf,
    inline_depth: usize,
    found: Vec<Declaration>,
}

impl<'ast> Visit<'ast> for Declarations {
    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        let name = node.ident.unraw().to_string();
        let path_attr = path_attribute(&node.attrs);

        if node.content.is_some() {
            let module = self.module.join(node.ident.to_string());
            let dir = self.dir.join(path_attr.as_deref().unwrap_or(&name));
            let outer_module = std::mem::replace(&mut self.module, module);
            let outer_dir = std::mem::replace(&mut self.dir, dir);
            self.inline_depth += 1;
            visit::visit_item_mod(self, node);
            self.inline_depth -= 1;
            self.module = outer_module;
            self.dir = outer_dir;
            return;
        }

        let module = self.module.join(node.ident.to_string());
        let declaration = match path_attr {
            // top-level `#[path]` is relative to the declaring file
            Some(relative) if self.inline_depth == 0 => Declaration {
                module,
                path: Some(self.file_dir.join(relative)).filter(|p| p.is_file()),
                mod_rs: true,
            },
            Some(relative) => Declaration {
                module,
                path: Some(self.dir.join(relative)).filter(|p| p.is_file()),
                mod_rs: true,
            },
            None => {
                let flat = self.dir.join(format!("{name}.rs"));
                let nested = self.dir.join(&name).join("mod.rs");
                if flat.is_file() {
                    Declaration { module, path: Some(flat), mod_rs: false }
                } else if nested.is_file() {
                    Declaration { module, path: Some(nested), mod_rs: true }
                } else {
                    Declaration { module, path: None, mod_rs: false }
                }
            }
        };
        self.found.push(declaration);
    }

    // modules inside function bodies are not part of the module tree
    fn visit_block(&mut self, _: &'ast Block) {}
}

/// Value of a `#[path = "..."]` attribute.
fn path_attribute(attrs: &[Attribute]) -> Option<String> {
    attrs.iter().find(|a| a.path().is_ident("path")).and_then(|attr| match attr.meta {
        Meta::NameValue(ref nv) => match nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(ref lit),
                ..
            }) => Some(lit.value()),
            _ => None,
        },
        _ => None,
    })
}

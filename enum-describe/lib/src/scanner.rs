//! Discovery of enums carrying the marker attribute.

use syn::visit::{self, Visit};
use syn::{Attribute, Block, Ident, ItemEnum, ItemMod};

use crate::config::MARKER;
use crate::namespace::ModulePath;
use crate::source::SourceFile;

/// A scope enclosing a candidate, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// An inline `mod name { .. }` block.
    Module(&'a Ident),
    /// A function body, block expression or other scope that items inside
    /// cannot be named from.
    Opaque,
}

/// An enum selected for generation, borrowed from its source file.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub item: &'a ItemEnum,
    pub file_module: &'a ModulePath,
    pub scopes: Vec<Scope<'a>>,
}

/// Returns `true` when `attr`'s last path segment is the marker.
pub fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == MARKER)
}

/// Collects every marked enum in `file`, in source order.
///
/// Purely syntactic: nothing is resolved beyond attribute names.
pub fn collect_candidates(file: &SourceFile) -> Vec<Candidate<'_>> {
    let mut scanner = Scanner {
        file_module: file.module_path(),
        scopes: Vec::new(),
        candidates: Vec::new(),
    };
    scanner.visit_file(file.syntax());
    scanner.candidates
}

struct Scanner<'a> {
    file_module: &'a ModulePath,
    scopes: Vec<Scope<'a>>,
    candidates: Vec<Candidate<'a>>,
}

impl<'a> Visit<'a> for Scanner<'a> {
    fn visit_item_enum(&mut self, node: &'a ItemEnum) {
        if node.attrs.iter().any(|attr| is_marker(attr)) {
            self.candidates.push(Candidate {
                item: node,
                file_module: self.file_module,
                scopes: self.scopes.clone(),
            });
        }
        visit::visit_item_enum(self, node);
    }

    fn visit_item_mod(&mut self, node: &'a ItemMod) {
        // `mod name;` declarations have no body to walk
        if node.content.is_none() {
            return;
        }
        self.scopes.push(Scope::Module(&node.ident));
        visit::visit_item_mod(self, node);
        self.scopes.pop();
    }

    fn visit_block(&mut self, node: &'a Block) {
        self.scopes.push(Scope::Opaque);
        visit::visit_block(self, node);
        self.scopes.pop();
    }
}

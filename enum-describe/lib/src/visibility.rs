//! Reachability of described enums from the crate root.
//!
//! Generated units are included at the crate root, so the enum and every
//! module on its path must be visible there.

use std::collections::HashMap;

use syn::visit::{self, Visit};
use syn::{Block, ItemEnum, ItemMod, Visibility};
use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::namespace::ModulePath;
use crate::source::SourceFile;

/// Visibility of every module declared across a set of source files.
#[derive(Debug, Default)]
pub struct ModuleTree {
    declarations: HashMap<ModulePath, Visibility>,
}

impl ModuleTree {
    pub fn from_sources(sources: &[SourceFile]) -> Self {
        let mut collector = Collector {
            module: ModulePath::root(),
            declarations: HashMap::new(),
        };
        for source in sources {
            collector.module = source.module_path().clone();
            collector.visit_file(source.syntax());
        }
        Self {
            declarations: collector.declarations,
        }
    }

    /// Fails unless `crate::<namespace>::<Enum>` can be named from the crate
    /// root.
    ///
    /// Modules whose declaration is not among the sources are assumed
    /// visible.
    pub fn ensure_reachable(&self, namespace: &ModulePath, item: &ItemEnum) -> Result<()> {
        let unreachable = |path: &ModulePath| GenerateError::UnreachableEnum {
            enum_name: item.ident.to_string(),
            item: path.to_string(),
        };

        let mut module = ModulePath::root();
        for (depth, segment) in namespace.segments().iter().enumerate() {
            module = module.join(segment.as_str());
            match self.declarations.get(&module) {
                Some(vis) if !reaches_root(vis, depth) => return Err(unreachable(&module)),
                Some(_) => {}
                None => debug!(module = %module, "Module declaration not found; assuming visible"),
            }
        }

        if !reaches_root(&item.vis, namespace.segments().len()) {
            return Err(unreachable(&namespace.join(item.ident.to_string())));
        }
        Ok(())
    }
}

/// Returns `true` when an item declared `depth` modules below the crate
/// root is visible at the crate root.
pub fn reaches_root(vis: &Visibility, depth: usize) -> bool {
    match vis {
        Visibility::Public(_) => true,
        Visibility::Inherited => depth == 0,
        Visibility::Restricted(restricted) => {
            let mut target = Some(depth);
            for segment in &restricted.path.segments {
                target = match segment.ident.to_string().as_str() {
                    "crate" => Some(0),
                    "self" => target,
                    "super" => target.and_then(|d| d.checked_sub(1)),
                    _ => target.map(|d| d + 1),
                };
            }
            target == Some(0)
        }
    }
}

struct Collector {
    module: ModulePath,
    declarations: HashMap<ModulePath, Visibility>,
}

impl<'ast> Visit<'ast> for Collector {
    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        let module = self.module.join(node.ident.to_string());
        self.declarations.insert(module.clone(), node.vis.clone());

        if node.content.is_some() {
            let outer = std::mem::replace(&mut self.module, module);
            visit::visit_item_mod(self, node);
            self.module = outer;
        }
    }

    fn visit_block(&mut self, _: &'ast Block) {}
}

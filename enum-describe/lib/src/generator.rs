//! The generation pass: collect, resolve, extract, synthesize, emit.

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::metadata::EnumModel;
use crate::namespace::{ModulePath, resolve_namespace};
use crate::scanner::{Candidate, collect_candidates};
use crate::sink::{EmissionSink, GeneratedUnit};
use crate::source::SourceFile;
use crate::synth::{synthesize_index, synthesize_unit};
use crate::visibility::ModuleTree;

/// Turns one candidate into its generated unit.
///
/// Visibility from the crate root is not checked here; [`Generator`] does
/// that with the whole module tree in view.
pub fn synthesize(candidate: &Candidate<'_>) -> Result<GeneratedUnit> {
    let namespace = resolve_namespace(candidate)?;
    synthesize_in(namespace, candidate)
}

fn synthesize_in(namespace: ModulePath, candidate: &Candidate<'_>) -> Result<GeneratedUnit> {
    let model = EnumModel::from_item(namespace, candidate.item)?;
    debug!(
        enum_name = %model.ident,
        members = model.members.len(),
        "Synthesizing unit"
    );
    synthesize_unit(&model)
}

/// Runs generation passes with a fixed configuration.
///
/// ## Examples
///
/// ```
/// use enum_describe::{Generator, GeneratorConfig, ModulePath, SourceFile};
///
/// let source = SourceFile::parse(
///     ModulePath::parse("colors"),
///     "#[describe_enum] pub enum Color { Red, #[description(\"Deep blue\")] Blue }",
/// )
/// .unwrap();
///
/// let units = Generator::new(GeneratorConfig::default()).generate(&[source]).unwrap();
/// assert_eq!(units[0].name(), "colors.Color.rs");
/// assert_eq!(units[1].name(), "enum_describe.rs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produces every unit of one pass without emitting anything.
    ///
    /// One unit per candidate in source order, then the index unit, so a
    /// sink that fails partway never holds an index naming units it did not
    /// receive. Any failing candidate fails the whole pass.
    #[instrument(skip_all, fields(files = sources.len()))]
    pub fn generate(&self, sources: &[SourceFile]) -> Result<Vec<GeneratedUnit>> {
        let candidates: Vec<Candidate<'_>> = sources
            .iter()
            .flat_map(collect_candidates)
            .collect();

        debug!(count = candidates.len(), "Collected candidates");

        let modules = ModuleTree::from_sources(sources);
        let mut seen = HashSet::new();
        let mut units = Vec::with_capacity(candidates.len() + 1);
        for candidate in &candidates {
            let namespace = resolve_namespace(candidate)?;
            modules.ensure_reachable(&namespace, candidate.item)?;
            let unit = synthesize_in(namespace, candidate)?;
            if !seen.insert(unit.name().to_string()) {
                return Err(GenerateError::DuplicateUnit {
                    name: unit.name().to_string(),
                });
            }
            units.push(unit);
        }

        let names: Vec<String> = units.iter().map(|u| u.name().to_string()).collect();
        units.push(synthesize_index(&self.config.index_name, &names));
        Ok(units)
    }

    /// Generates a pass and hands every unit to `sink`.
    ///
    /// Nothing reaches the sink unless the whole pass succeeded. Returns the
    /// number of enums described.
    pub fn run<S: EmissionSink + ?Sized>(&self, sources: &[SourceFile], sink: &mut S) -> Result<usize> {
        let units = self.generate(sources)?;
        for unit in &units {
            sink.emit(unit)?;
        }

        let described = units.len().saturating_sub(1);
        info!(described, "Generation pass complete");
        Ok(described)
    }
}

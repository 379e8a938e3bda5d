use std::path::{Path, PathBuf};

use clap::Args;
use dslscope_api::error::{ApiError, ApiResult};
use dslscope_api::models::{ClosureScope, Reference, TypeRef, TypeResolutionContext, Usage};
use dslscope_resolve::gradle::DEFAULT_IMPORTS;
use dslscope_resolve::{
    CollectingProcessor, DeclarationResolver, GradleDslDelegation, InMemoryTypeSystem,
    TypeProvider, TypeUniverse,
};
use tabled::Table;
use tabled::settings::Style;
use tracing::info;

use crate::view::{ResolveReport, candidate_rows};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// JSON type universe file
    #[arg(long, value_name = "FILE")]
    pub universe: PathBuf,

    /// Fully qualified name of the class to search
    #[arg(long, value_name = "FQN")]
    pub class: String,

    /// Referenced name; omit to list every member of the class
    #[arg(long)]
    pub name: Option<String>,

    /// The reference is the target of an assignment
    #[arg(long)]
    pub write: bool,

    /// The reference is invoked with arguments of these types, e.g. `java.lang.String int`
    #[arg(long, value_name = "ARG_TYPE", num_args = 0..)]
    pub call: Option<Vec<String>>,

    /// Enclosing closure scope ids, innermost first
    #[arg(long = "closure", value_name = "SCOPE_ID", num_args = 1..)]
    pub closures: Vec<u32>,

    /// Method the innermost closure is passed to, e.g. `dependencies`
    #[arg(long, value_name = "METHOD")]
    pub block: Option<String>,

    /// Number of textual candidates at the reference site
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub candidates: usize,

    /// Stop after this many candidates
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Builds the reference site described by the flags.
    ///
    /// `--block` names the call of the innermost closure; with no `--closure`
    /// it opens scope `0`.
    pub fn to_reference(&self) -> ApiResult<Reference> {
        let name = self.name.clone().unwrap_or_default();
        let mut reference = match &self.call {
            Some(args) => Reference::call(name, parse_types(args)?),
            None => Reference::read(name),
        };
        if self.write {
            reference.usage = Usage::Write;
        }

        let mut scopes = self.closures.clone();
        if scopes.is_empty() && self.block.is_some() {
            scopes.push(0);
        }
        for (depth, id) in scopes.into_iter().enumerate() {
            let scope = match &self.block {
                Some(method) if depth == 0 => ClosureScope::block(id, method.clone()),
                _ => ClosureScope::new(id),
            };
            reference = reference.inside(scope);
        }

        Ok(reference.with_textual_candidates(self.candidates))
    }
}

fn parse_types(texts: &[String]) -> ApiResult<Vec<TypeRef>> {
    texts.iter().map(|text| text.parse()).collect()
}

/// Loads a universe and checks that it declares `class`.
pub(crate) fn open_universe(path: &Path, class: &str) -> ApiResult<(TypeUniverse, InMemoryTypeSystem)> {
    let universe = TypeUniverse::load(path)?;
    let ts = universe.type_system()?;
    if ts.get_type_info(class).is_none() {
        return Err(ApiError::NotFound(format!(
            "class `{}` in {}",
            class,
            path.display()
        )));
    }
    Ok((universe, ts))
}

/// Universe imports, then the implicit Gradle script imports.
fn resolution_context(universe: &TypeUniverse) -> TypeResolutionContext {
    let mut context = universe.context();
    context
        .imports
        .extend(DEFAULT_IMPORTS.iter().map(|import| import.to_string()));
    context
}

pub fn run(args: &ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (universe, ts) = open_universe(&args.universe, &args.class)?;
    let reference = args.to_reference()?;

    let delegation = GradleDslDelegation::with_overrides(universe.delegation());
    let resolver = DeclarationResolver::new(&ts, &delegation).with_context(resolution_context(&universe));
    let mut found = match args.limit {
        Some(limit) => CollectingProcessor::with_limit(limit),
        None => CollectingProcessor::new(),
    };

    let outcome = resolver.process_declarations(
        &args.class,
        &reference,
        args.name.as_deref(),
        &mut (),
        &mut found,
    );
    let candidates = found.into_candidates();
    info!(
        class = %args.class,
        name = ?args.name,
        count = candidates.len(),
        resolved = outcome.resolved,
        "resolution finished"
    );

    if args.json {
        let report = ResolveReport::new(&args.class, outcome, &candidates);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if candidates.is_empty() {
        println!("No candidates on {}.", args.class);
    } else {
        let rows = candidate_rows(&candidates);
        println!("{}", Table::new(rows).with(Style::psql()));
        if !outcome.should_continue {
            println!("(stopped after {} candidates)", candidates.len());
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use catfact_common::NumericColumn;
use catfact_model::{LevelOrder, LumpOptions, ReorderOptions};
use catfact_transform::{collapse, infreq, inorder, inseq, lump_n, recode, reorder};
use tracing::{info, info_span, warn};

use catfact_cli::config::load_mapping_file;
use catfact_cli::report::LevelReport;
use catfact_cli::source::{column, factor_column, read_csv};

use crate::cli::{CollapseArgs, LevelsArgs, LumpArgs, RecodeArgs, ReorderArgs};

pub fn run_levels(args: &LevelsArgs) -> Result<LevelReport> {
    let input = &args.input;
    let _guard = info_span!("levels", column = %input.column).entered();
    let df = read_csv(&input.csv)?;
    let series = factor_column(&df, &input.column)?;
    let order = LevelOrder::from(args.order);
    let factor = match order {
        LevelOrder::Appearance => inorder(&series, None),
        LevelOrder::Frequency => infreq(&series, None),
        LevelOrder::Lexical => inseq(&series),
    }
    .with_context(|| format!("levels of column '{}'", input.column))?;
    info!(?order, levels = factor.levels().len(), "extracted levels");
    Ok(LevelReport::from_factor(&input.column, "levels", &factor))
}

pub fn run_reorder(args: &ReorderArgs) -> Result<LevelReport> {
    let input = &args.input;
    let _guard = info_span!("reorder", column = %input.column, by = %args.by).entered();
    let df = read_csv(&input.csv)?;
    let series = factor_column(&df, &input.column)?;
    let companion = column(&df, &args.by)?;
    let options = ReorderOptions::new()
        .with_aggregation(args.aggregation.into())
        .with_descending(args.descending);
    let factor = reorder(&series, &companion, &options)
        .with_context(|| format!("reorder column '{}' by '{}'", input.column, args.by))?;
    info!(
        aggregation = ?options.aggregation,
        descending = options.descending,
        levels = factor.levels().len(),
        "reordered levels"
    );
    Ok(LevelReport::from_factor(&input.column, "reorder", &factor))
}

pub fn run_collapse(args: &CollapseArgs) -> Result<LevelReport> {
    let input = &args.input;
    let _guard = info_span!("collapse", column = %input.column).entered();
    let mapping = load_mapping_file(&args.groups)?;
    let fallback = args.fallback.clone().or(mapping.fallback);
    let df = read_csv(&input.csv)?;
    let series = factor_column(&df, &input.column)?;
    let factor = collapse(&series, fallback.as_deref(), &mapping.groups)
        .with_context(|| format!("collapse column '{}'", input.column))?;
    info!(
        groups = mapping.groups.len(),
        fallback = fallback.as_deref(),
        "collapsed levels"
    );
    Ok(LevelReport::from_factor(&input.column, "collapse", &factor))
}

pub fn run_recode(args: &RecodeArgs) -> Result<LevelReport> {
    let input = &args.input;
    let _guard = info_span!("recode", column = %input.column).entered();
    let mapping = load_mapping_file(&args.groups)?;
    if mapping.fallback.is_some() {
        warn!("recode ignores the mapping file's fallback");
    }
    let df = read_csv(&input.csv)?;
    let series = factor_column(&df, &input.column)?;
    let factor = recode(&series, &mapping.groups)
        .with_context(|| format!("recode column '{}'", input.column))?;
    info!(groups = mapping.groups.len(), "recoded levels");
    Ok(LevelReport::from_factor(&input.column, "recode", &factor))
}

pub fn run_lump(args: &LumpArgs) -> Result<LevelReport> {
    let input = &args.input;
    let _guard = info_span!("lump", column = %input.column, n = args.n).entered();
    let df = read_csv(&input.csv)?;
    let series = factor_column(&df, &input.column)?;
    let weights = args
        .weights
        .as_deref()
        .map(|name| column(&df, name))
        .transpose()?;
    let options = LumpOptions::new(args.n).with_fallback(args.fallback.as_str());
    let factor = lump_n(
        &series,
        &options,
        weights.as_ref().map(|series| series as &dyn NumericColumn),
    )
    .with_context(|| format!("lump column '{}'", input.column))?;
    info!(
        weighted = weights.is_some(),
        levels = factor.levels().len(),
        "lumped levels"
    );
    Ok(LevelReport::from_factor(&input.column, "lump", &factor))
}

use super::Context;
use crate::reports;
use clap::Args;
use facetview::config::ViewConfig;
use facetview::{FacetResult, StatisticField};

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: ViewConfig,

    /// Facet to show (`schema`, `countries` or any other field name).
    /// All reported facets are shown when omitted.
    #[arg(short, long)]
    pub field: Option<String>,

    /// Expand every facet instead of showing only the first page.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Print the views as a single JSON array instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ShowArgs, ctx: &Context) -> FacetResult<()> {
    let fields: Vec<StatisticField> = match &args.field {
        Some(name) => vec![StatisticField::from(name.as_str())],
        None => ctx.stats.facets.keys().cloned().collect(),
    };

    let mut views = Vec::with_capacity(fields.len());
    for field in &fields {
        let mut view = ctx.present(field);
        if args.all {
            if let Some(loaded) = view.loaded_mut() {
                loaded.show_all();
            }
        }
        views.push(view);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("\n📊 === COLLECTION {} === 📊", ctx.stats.collection_id);
    for view in &views {
        reports::print_statistic(view);
    }
    Ok(())
}

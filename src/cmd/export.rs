use super::Context;
use clap::Args;
use facetview::config::ViewConfig;
use facetview::export::Export;
use facetview::{FacetError, FacetResult, StatisticField};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ViewConfig,

    #[arg(short, long)]
    pub field: String,

    /// Working directory for the CSV before publication.
    #[arg(long, default_value = "exports/tmp")]
    pub out: PathBuf,

    /// Archive directory; published files are named by content hash.
    #[arg(long, default_value = "exports/archive")]
    pub archive: PathBuf,

    /// Days until the export expires.
    #[arg(long, default_value_t = 30)]
    pub expires_days: u64,
}

pub fn run(args: &ExportArgs, ctx: &Context) -> FacetResult<()> {
    let field = StatisticField::from(args.field.as_str());
    let view = ctx.present(&field);
    let loaded = view.loaded().ok_or_else(|| {
        FacetError::Export(format!(
            "statistic '{}' is still pending, nothing to export",
            field
        ))
    })?;

    let label = format!("{} {}", ctx.stats.collection_id, field);
    let mut export = Export::create(
        label,
        "export_statistics",
        Some(ctx.stats.collection_id.clone()),
        Some(expiry(args.expires_days)?),
    )?;

    let path = export.write_csv(loaded, &args.out)?;
    info!("📝 Wrote {} rows to {}", loaded.rows.len(), path.display());

    let published = export.publish(&args.archive)?;
    info!("📦 Published to {}", published.display());

    println!("{}", serde_json::to_string_pretty(&export.to_record())?);
    Ok(())
}

fn expiry(days: u64) -> FacetResult<Duration> {
    days.checked_mul(24 * 60 * 60)
        .map(Duration::from_secs)
        .ok_or_else(|| FacetError::Config(format!("--expires-days {} is out of range", days)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_converts_days() {
        assert_eq!(expiry(2).unwrap(), Duration::from_secs(172_800));
    }

    #[test]
    fn expiry_overflow_is_config_error() {
        assert!(matches!(expiry(u64::MAX), Err(FacetError::Config(_))));
    }
}

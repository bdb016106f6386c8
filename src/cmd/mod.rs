pub mod export;
pub mod show;

use facetview::config::ViewConfig;
use facetview::links::SearchLinkBuilder;
use facetview::locale::Catalog;
use facetview::model::SchemaRegistry;
use facetview::presenter::{self, Capabilities, StatisticsProps, StatisticsView};
use facetview::{CollectionStatistics, FacetResult, StatisticField};
use tracing::info;

/// Loaded inputs plus the capabilities the presenter reads from.
pub struct Context {
    pub config: ViewConfig,
    pub stats: CollectionStatistics,
    pub registry: SchemaRegistry,
    pub catalog: Catalog,
    pub links: SearchLinkBuilder,
}

impl Context {
    pub fn load(stats_path: &str, config: ViewConfig) -> FacetResult<Self> {
        let stats = CollectionStatistics::load_from_file(stats_path)?;

        let registry = match config.model_path() {
            Some(path) => {
                info!("🧬 Loading schema model: {}", path);
                SchemaRegistry::load_from_file(path)?
            }
            None => SchemaRegistry::new_with_defaults(),
        };

        let catalog = match config.messages_path() {
            Some(path) => Catalog::load_from_file(path)?,
            None => Catalog::new(),
        };

        let links = SearchLinkBuilder::new(config.base_url.clone());

        Ok(Self {
            config,
            stats,
            registry,
            catalog,
            links,
        })
    }

    pub fn caps(&self) -> Capabilities<'_> {
        Capabilities {
            types: &self.registry,
            messages: &self.catalog,
            links: &self.links,
        }
    }

    /// Presents one facet. Facets missing from the file count as pending.
    pub fn present(&self, field: &StatisticField) -> StatisticsView {
        let facet = self.stats.facet(field);
        let props = StatisticsProps {
            collection: &self.stats.collection_id,
            field,
            total: facet.and_then(|f| f.total),
            values: facet.and_then(|f| f.values.as_ref()),
        };
        presenter::present(props, &self.caps(), self.config.page_size)
    }
}

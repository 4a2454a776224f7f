// Similarity engine: tag-profile overlap scoring, rankings and catalog
// filters.

pub mod engine;
pub mod filter;
pub mod overlap;

pub use engine::{
    aggregate_for_selection, rank_content_for_fighter, rank_fighters_for_content, score,
    score_tags, weighted_total, GENRE_WEIGHT, NARRATIVE_WEIGHT, THEME_WEIGHT,
};
pub use filter::{
    available_filters, filter_catalog, match_fighters_by_tags, recommend_for_filter, CatalogFilter,
};
pub use overlap::{intersection_profile, jaccard, shared_tags};

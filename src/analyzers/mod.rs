pub mod category_breakdown;
pub mod scheme_analyzer;
pub mod trend_aggregator;

pub use category_breakdown::{event_breakdown, venue_breakdown, BreakdownKind};
pub use scheme_analyzer::{SchemeAnalytics, SchemeAnalyzer, SchemeStatistics, WaterAvailability};
pub use trend_aggregator::{aggregate_trend, TrendAggregator};

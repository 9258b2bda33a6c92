pub mod aggregate;
pub mod cache;
pub mod calendar;
pub mod color;
pub mod disclosure;
pub mod grouping;

pub use aggregate::{AggregateOptions, aggregate, aggregate_with};
pub use cache::AggregateCache;
pub use calendar::{Calendar, LabelProvider, LocaleLabels};
pub use color::{ColorScale, Rgb, color_for};
pub use disclosure::{Disclosure, DisclosureEvent, Expansion, HoverEntry};
pub use grouping::OrderedMultimap;

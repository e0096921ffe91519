pub mod aggregator;
pub mod gnews;
pub mod planner;

pub use aggregator::Aggregator;
pub use gnews::GNewsClient;
pub use planner::{plan, FetchPlanEntry};

pub mod prelude {
    pub use crate::{Aggregator, FetchPlanEntry, GNewsClient};
    pub use pn_core::{Article, NewsProvider, Result};
}

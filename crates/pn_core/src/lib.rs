pub mod error;
pub mod model;
pub mod provider;
pub mod types;

pub use error::Error;
pub use model::SummaryModel;
pub use provider::NewsProvider;
pub use types::{Article, ArticleSummary, Prompt, SummaryRequest};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{Article, ArticleSummary, Error, Prompt, Result, SummaryRequest};
    pub use crate::{NewsProvider, SummaryModel};
}

mod extractor_factory;

pub mod llm;
pub mod observability;
pub mod pdf;
pub mod schema;

pub use extractor_factory::ExtractorFactory;

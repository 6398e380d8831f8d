mod buckets;
mod category;
mod context;
mod directive;
mod effect;
mod headers;
mod resolution_report;
mod response;
mod value;

pub use buckets::BlockBuckets;
pub use category::Category;
pub use context::Context;
pub use directive::Directive;
pub use effect::Effect;
pub use headers::Headers;
pub use resolution_report::ResolutionReport;
pub use response::Response;
pub use value::Value;

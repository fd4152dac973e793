pub mod asset;
pub mod codec;
pub mod geometry;
pub mod report;
pub mod schema;

pub use asset::ImageAsset;
pub use geometry::OverlayRegion;
pub use report::{AnalysisResult, Defect, Verdict};
pub use schema::SchemaError;

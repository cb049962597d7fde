pub mod types;

pub use types::{DesignRecord, Drawing, MaterialSelection, SketchStatistics};

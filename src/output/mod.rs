pub mod formatter;

pub use formatter::{
    format_json, format_materials_table, format_report, format_score, format_tier,
    should_use_colors,
};

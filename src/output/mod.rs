pub mod formatter;

pub use formatter::{
    format_json, format_ranked_table, format_value, should_use_colors, OutputFormat,
};

pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_tsv, format_verdict, should_use_colors, UNSCORED,
};

pub mod formatter;

pub use formatter::{
    format_report_list, format_score_card, format_scored_table, format_tsv, should_use_colors,
    ScoredLocation,
};

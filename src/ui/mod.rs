pub mod chart;
pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use chart::{bar_chart, DEFAULT_CHART_WIDTH};
pub use icons::Icons;
pub use output::{banner, chart, header, info, is_quiet, section, success, summary_row, warn};
pub use table::{quotes_table, stats_table, TableBuilder};
pub use theme::{init_theme, theme, Theme, ThemeMode};

mod report;
pub use report::{
    report_subtitle, slides_for, LoadState, ReportApp, ReportDeck, ReportDeckProps, ReportView,
    THEME_CSS_INLINE,
};

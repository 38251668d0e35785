//! Colored terminal rendering for calmerge-core types.

use calmerge_core::MergeReport;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for MergeReport {
    fn render(&self) -> String {
        let summary = format!("Done: {} of {} events kept", self.retained, self.examined);
        let mut lines = vec![summary.green().to_string()];

        let mut dropped = Vec::new();
        if self.filtered > 0 {
            dropped.push(format!("{} filtered", self.filtered));
        }
        if self.duplicates > 0 {
            dropped.push(format!("{} duplicates", self.duplicates));
        }
        if self.skipped_no_start > 0 {
            dropped.push(format!("{} without start time", self.skipped_no_start));
        }
        if !dropped.is_empty() {
            lines.push(format!("   {}", dropped.join(", ").dimmed()));
        }

        if self.feeds_failed > 0 {
            let failed = format!(
                "{} of {} feeds could not be loaded",
                self.feeds_failed,
                self.feeds_failed + self.feeds_loaded
            );
            lines.push(format!("   {}", failed.yellow()));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mentions_counts() {
        let report = MergeReport {
            examined: 4,
            retained: 2,
            filtered: 1,
            duplicates: 1,
            skipped_no_start: 0,
            feeds_loaded: 1,
            feeds_failed: 1,
        };

        let rendered = report.render();
        assert!(rendered.contains("2 of 4 events kept"));
        assert!(rendered.contains("1 filtered, 1 duplicates"));
        assert!(!rendered.contains("without start time"));
        assert!(rendered.contains("1 of 2 feeds could not be loaded"));
    }
}

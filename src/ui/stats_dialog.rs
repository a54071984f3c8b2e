use crate::model::StatisticsReport;

pub const STATS_HEADING: &str = "Statistics";
pub const ROUND_STATS_HEADING: &str = "Round Stats";
pub const DIALOG_BACKGROUND: &str = "#FFE6CC";

/// One rendered label of the stats dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsLine {
    pub text: String,
    pub is_heading: bool,
    pub background: &'static str,
}

impl StatsLine {
    fn heading(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_heading: true,
            background: DIALOG_BACKGROUND,
        }
    }

    fn body(text: String) -> Self {
        Self {
            text,
            is_heading: false,
            background: DIALOG_BACKGROUND,
        }
    }
}

pub struct StatsDialog;

impl StatsDialog {
    pub fn success_line(report: &StatisticsReport) -> String {
        format!(
            "Success Rate: {} / {} ({}%)",
            report.rounds_won,
            report.rounds_played,
            report.success_rate_rounded()
        )
    }

    /// Labels in display order: game totals, the comment, then per-round stats.
    pub fn lines(report: &StatisticsReport, highlight_comment: bool) -> Vec<StatsLine> {
        let mut comment = StatsLine::body(report.comment.clone());
        if highlight_comment {
            if let Some(colour) = report.category.highlight_colour() {
                comment.background = colour;
            }
        }

        vec![
            StatsLine::heading(STATS_HEADING),
            StatsLine::body(Self::success_line(report)),
            StatsLine::body(format!("Total Score: {}", report.total_score)),
            StatsLine::body(format!("Maximum Possible Score: {}", report.max_possible)),
            comment,
            StatsLine::heading(ROUND_STATS_HEADING),
            StatsLine::body(format!("Best Score: {}", report.best_score_display())),
            StatsLine::body(format!(
                "Average Score: {}",
                report.average_score_rounded()
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::compute;
    use crate::model::{BEST_SCORE_UNAVAILABLE, ZERO_COMMENT};

    fn texts(lines: &[StatsLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_sample_game_lines() {
        let report = compute(3, &[0, 15, 16, 0, 16], &[20, 19, 18, 20, 20]).unwrap();
        let lines = StatsDialog::lines(&report, true);
        assert_eq!(
            texts(&lines),
            vec![
                "Statistics",
                "Success Rate: 3 / 5 (60%)",
                "Total Score: 47",
                "Maximum Possible Score: 97",
                "",
                "Round Stats",
                "Best Score: 16",
                "Average Score: 9",
            ]
        );
        assert_eq!(lines[4].background, DIALOG_BACKGROUND);
        assert!(lines[0].is_heading && lines[5].is_heading);
    }

    #[test]
    fn test_zero_game_lines() {
        let report = compute(0, &[0, 0, 0], &[10, 10, 10]).unwrap();
        let lines = StatsDialog::lines(&report, true);
        assert_eq!(lines[4].text, ZERO_COMMENT);
        assert_eq!(lines[4].background, "#F8CECC");
        assert_eq!(lines[6].text, format!("Best Score: {BEST_SCORE_UNAVAILABLE}"));
    }

    #[test]
    fn test_highlight_can_be_disabled() {
        let report = compute(2, &[10, 10], &[10, 10]).unwrap();
        assert_eq!(StatsDialog::lines(&report, true)[4].background, "#D5E8D4");
        assert_eq!(
            StatsDialog::lines(&report, false)[4].background,
            DIALOG_BACKGROUND
        );
    }
}

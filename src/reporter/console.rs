//! Console reporter with colored output

use crate::analyzer::scoring::ScoreCalculator;
use crate::competitor::{CompetitorInsight, CompetitorReport, FetchStatus};
use crate::{ContentReport, KeywordCount, Rating};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print a full report
    pub fn report(&self, report: &ContentReport) {
        print!("{}", self.render(report));
    }

    /// Print just the score
    pub fn report_quiet(&self, report: &ContentReport) {
        println!("{}", self.render_quiet(report));
    }

    pub fn render_quiet(&self, report: &ContentReport) -> String {
        format!("{}: {:.2}", report.source, report.seo_score)
    }

    pub fn render(&self, report: &ContentReport) -> String {
        let mut lines = Vec::new();
        self.header_lines(&mut lines, report);
        self.metric_lines(&mut lines, report);
        self.keyword_lines(&mut lines, "Suggested Keywords:", &report.suggested_keywords);
        self.recommendation_lines(&mut lines, report);
        if let Some(ref competitors) = report.competitors {
            self.competitor_lines(&mut lines, competitors);
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn header_lines(&self, lines: &mut Vec<String>, report: &ContentReport) {
        lines.push(String::new());
        lines.push(self.paint_bold(&format!("SEO Content Analysis: {}", report.source)));
        if report.target_keywords.is_empty() {
            lines.push("   Target keywords: (none)".to_string());
        } else {
            lines.push(format!("   Target keywords: {}", report.target_keywords.join(", ")));
        }
        lines.push(String::new());
        lines.push(format!(
            "   SEO score: {}",
            self.paint_bold(&format!("{:.2}", report.seo_score))
        ));
        lines.push(String::new());
    }

    fn metric_lines(&self, lines: &mut Vec<String>, report: &ContentReport) {
        lines.push(format!("   {}", self.paint_bold("Metrics:")));
        let rows = [
            (
                "Word count",
                report.word_count.value.to_string(),
                report.word_count.rating,
            ),
            (
                "Readability",
                format!("{:.2}", report.readability.value),
                report.readability.rating,
            ),
            (
                "Keyword density",
                format!("{:.2}%", report.keyword_density.value * 100.0),
                report.keyword_density.rating,
            ),
        ];
        for (name, value, rating) in rows {
            lines.push(format!(
                "   {:<16} {:>10}  {}",
                name,
                value,
                self.colorize_rating(rating)
            ));
            if self.verbose {
                lines.push(format!(
                    "   {:<16} {}",
                    "",
                    self.paint_dimmed(ScoreCalculator::rating_description(rating))
                ));
            }
        }
        lines.push(String::new());
    }

    fn keyword_lines(&self, lines: &mut Vec<String>, title: &str, keywords: &[KeywordCount]) {
        lines.push(format!("   {}", self.paint_bold(title)));
        if keywords.is_empty() {
            lines.push(format!("   {}", self.paint_dimmed("(none)")));
        }
        lines.extend(
            keywords
                .iter()
                .map(|entry| format!("   - {} ({})", entry.keyword, entry.count)),
        );
        lines.push(String::new());
    }

    fn recommendation_lines(&self, lines: &mut Vec<String>, report: &ContentReport) {
        if report.recommendations.is_empty() {
            return;
        }
        lines.push(format!("   {}", self.paint_bold("Recommendations:")));
        let arrow = if self.use_colors {
            "→".cyan().to_string()
        } else {
            "→".to_string()
        };
        for rec in &report.recommendations {
            lines.push(format!("   {} {}", arrow, rec));
        }
        lines.push(String::new());
    }

    fn competitor_lines(&self, lines: &mut Vec<String>, competitors: &CompetitorReport) {
        lines.push("─".repeat(60));
        lines.push(format!("   {}", self.paint_bold("Competitors:")));
        for insight in &competitors.insights {
            self.insight_lines(lines, insight);
        }
        lines.push(String::new());

        lines.push(format!(
            "   {}",
            self.paint_bold("Competitor Keywords (summed frequencies):")
        ));
        if competitors.aggregated.is_empty() {
            lines.push(format!(
                "   {}",
                self.paint_dimmed("(no competitor pages could be analyzed)")
            ));
        }
        lines.extend(
            competitors
                .aggregated
                .iter()
                .map(|entry| format!("   - {} ({})", entry.keyword, entry.count)),
        );
        lines.push(String::new());
    }

    fn insight_lines(&self, lines: &mut Vec<String>, insight: &CompetitorInsight) {
        lines.push(format!(
            "   {} {} [{}]",
            self.status_icon(insight.status),
            insight.slot,
            insight.status
        ));
        if let Some(ref url) = insight.url {
            lines.push(format!("       {}", self.paint_dimmed(url)));
        }
        if !insight.keywords.is_empty() {
            let keywords: Vec<String> = insight
                .keywords
                .iter()
                .map(|k| format!("{} ({})", k.keyword, k.count))
                .collect();
            lines.push(format!("       {}", keywords.join(", ")));
        }
        if self.verbose {
            lines.push(format!("       query: {}", insight.query));
        }
        if let Some(ref detail) = insight.detail {
            lines.push(format!("       {}", self.paint_dimmed(detail)));
        }
    }

    fn status_icon(&self, status: FetchStatus) -> String {
        let icon = match status {
            FetchStatus::Success => "✓",
            FetchStatus::Unreachable => "✗",
            FetchStatus::NoResult => "∅",
        };
        if !self.use_colors {
            return icon.to_string();
        }
        match status {
            FetchStatus::Success => icon.green().to_string(),
            FetchStatus::Unreachable => icon.red().to_string(),
            FetchStatus::NoResult => icon.yellow().to_string(),
        }
    }

    fn colorize_rating(&self, rating: Rating) -> String {
        let s = rating.to_string();
        if !self.use_colors {
            return s;
        }
        match rating {
            Rating::Optimal => s.green().bold().to_string(),
            Rating::Good => s.yellow().to_string(),
            Rating::Low => s.red().to_string(),
        }
    }

    fn paint_bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn paint_dimmed(&self, s: &str) -> String {
        if self.use_colors {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

//! Horizontal bar charts for rankings

use crate::analytics::Ranking;

const BAR: char = '█';

/// Default bar length of the largest entry
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Plain-text bar chart, one line per entry in ranking order.
///
/// Bars are scaled to the largest count; every non-zero count gets at least
/// one block.
pub fn bar_chart(ranking: &Ranking, width: usize) -> String {
    let max = ranking.max_count();
    if ranking.is_empty() || max == 0 {
        return String::new();
    }

    let label_width = ranking
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in ranking {
        let scaled = (entry.count as f64 / max as f64 * width as f64).round() as usize;
        let len = if entry.count > 0 { scaled.max(1) } else { 0 };
        let pad = label_width - entry.label.chars().count();
        out.push_str(&format!(
            "{}{} │{} {}\n",
            entry.label,
            " ".repeat(pad),
            BAR.to_string().repeat(len),
            entry.count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RankEntry;

    #[test]
    fn test_bar_chart_scales_to_max() {
        let ranking = Ranking::new(vec![
            RankEntry::new("Albert Einstein", 10),
            RankEntry::new("J.K. Rowling", 5),
            RankEntry::new("Yoda", 1),
        ]);
        let chart = bar_chart(&ranking, 20);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches(BAR).count(), 20);
        assert_eq!(lines[1].matches(BAR).count(), 10);
        assert_eq!(lines[2].matches(BAR).count(), 2);
        assert!(lines[0].ends_with(" 10"));
        // labels are padded to a common width
        assert!(lines[2].starts_with("Yoda            │"));
    }

    #[test]
    fn test_small_counts_still_get_a_block() {
        let ranking = Ranking::new(vec![RankEntry::new("big", 1000), RankEntry::new("tiny", 1)]);
        let chart = bar_chart(&ranking, 10);
        assert_eq!(chart.lines().nth(1).unwrap().matches(BAR).count(), 1);
    }

    #[test]
    fn test_empty_ranking() {
        assert!(bar_chart(&Ranking::default(), 10).is_empty());
    }
}

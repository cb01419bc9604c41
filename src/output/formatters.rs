//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a guess's pattern count relative to the best guess
#[must_use]
pub fn pattern_bar(count: usize, best: usize, width: usize) -> String {
    create_progress_bar(count as f64, best as f64, width)
}

/// Format a probability as "0.012345  (1.2345%)"
#[must_use]
pub fn format_probability(p: f64) -> String {
    format!("{p:.6}  ({:.4}%)", p * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn pattern_bar_relative_to_best() {
        assert_eq!(pattern_bar(17, 34, 4), "██░░");
    }

    #[test]
    fn probability_format() {
        assert_eq!(format_probability(0.25), "0.250000  (25.0000%)");
    }
}

//! Backward context window construction.

/// Join the normalized lines at `index - 2`, `index - 1` and `index` with
/// single spaces, in that order.
///
/// Indices below zero contribute nothing; lines after `index` are never
/// included (on these statements the member identity precedes the amount).
/// The window never crosses a page boundary because `lines` holds a single
/// page.
pub fn build_context(lines: &[String], index: usize) -> String {
    let start = index.saturating_sub(2);
    lines[start..=index].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_line_stands_alone() {
        let lines = lines(&["TOTALE 25,00"]);
        assert_eq!(build_context(&lines, 0), "TOTALE 25,00");
    }

    #[test]
    fn test_second_line_gets_one_predecessor() {
        let lines = lines(&["MARIO ROSSI", "TOTALE 25,00"]);
        assert_eq!(build_context(&lines, 1), "MARIO ROSSI TOTALE 25,00");
    }

    #[test]
    fn test_window_is_three_lines_deep() {
        let lines = lines(&["A", "B", "C", "D"]);
        assert_eq!(build_context(&lines, 3), "B C D");
    }

    #[test]
    fn test_no_look_ahead() {
        let lines = lines(&["A", "B", "C", "D"]);
        assert_eq!(build_context(&lines, 2), "A B C");
    }
}

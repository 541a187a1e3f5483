//! Render solve results as text.

use packwise_core::Selection;

/// The chosen item ids joined with `", "`, or `"-"` when nothing fits.
#[must_use]
pub fn format_selection(selection: &Selection) -> String {
    if selection.is_empty() {
        return "-".to_owned();
    }
    selection
        .item_ids()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join per-problem result lines with newlines.
#[must_use]
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwise_core::{Item, Weight};
    use rstest::rstest;

    #[rstest]
    fn joins_item_ids_with_comma_and_space() {
        let items = vec![
            Item::new(7, Weight::from_hundredths(6_002), 74),
            Item::new(2, Weight::from_hundredths(1_455), 74),
        ];
        let selection = Selection::new(items, Weight::from_hundredths(7_457), 148);

        assert_eq!(format_selection(&selection), "7, 2");
    }

    #[rstest]
    fn renders_the_empty_selection_as_a_dash() {
        assert_eq!(format_selection(&Selection::empty()), "-");
    }

    #[rstest]
    fn joins_result_lines_with_newlines() {
        let lines = vec!["4".to_owned(), "-".to_owned(), "7, 2".to_owned()];
        assert_eq!(join_lines(&lines), "4\n-\n7, 2");
    }
}

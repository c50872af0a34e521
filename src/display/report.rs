//! Text layout helpers for terminal output

/// Width of the summary block
pub const SUMMARY_WIDTH: usize = 37;

/// Center a title in a field of the given width
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Frame a title between separator lines, as used for the menu
pub fn boxed_title(title: &str, width: usize) -> String {
    format!(
        "{}\n{}\n{}\n",
        separator(width),
        format_header(title, width),
        separator(width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("abc", 9), "   abc");
        assert_eq!(format_header("too long", 4), "too long");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(3), "---");
        assert_eq!(double_separator(SUMMARY_WIDTH).len(), SUMMARY_WIDTH);
    }

    #[test]
    fn test_boxed_title() {
        assert_eq!(boxed_title("MENU", 8), "--------\n  MENU\n--------\n");
    }
}

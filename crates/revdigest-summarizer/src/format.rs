//! Display formatting for model-produced bullet lists.

const BULLET: char = '•';

/// Normalizes a summary into one `"\n• item"` line per bullet.
///
/// Whitespace runs collapse to single spaces and `*` markers become `•`.
/// Text before the first bullet is kept (trimmed) as a lead-in; empty bullets
/// are dropped. Applying the function to its own output returns it unchanged.
#[must_use]
pub fn format_bullet_points(text: &str) -> String {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('*', "•");

    let mut segments = collapsed.split(BULLET);
    let mut formatted = segments.next().unwrap_or_default().trim().to_owned();
    for item in segments.map(str::trim).filter(|item| !item.is_empty()) {
        formatted.push('\n');
        formatted.push(BULLET);
        formatted.push(' ');
        formatted.push_str(item);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_asterisk_list() {
        let raw = "* Great co-op\n* Tight gunplay\n*   Gorgeous maps  ";
        assert_eq!(
            format_bullet_points(raw),
            "\n• Great co-op\n• Tight gunplay\n• Gorgeous maps"
        );
    }

    #[test]
    fn puts_inline_bullets_on_their_own_lines() {
        let raw = "Highlights: • Fast matches • Fair progression";
        assert_eq!(
            format_bullet_points(raw),
            "Highlights:\n• Fast matches\n• Fair progression"
        );
    }

    #[test]
    fn drops_empty_bullets() {
        assert_eq!(format_bullet_points("* \n*\n* Stable servers"), "\n• Stable servers");
        assert_eq!(format_bullet_points("**Bold** claim"), "\n• Bold\n• claim");
    }

    #[test]
    fn plain_text_passes_through_collapsed() {
        assert_eq!(
            format_bullet_points("  Summary   unavailable.\n"),
            "Summary unavailable."
        );
        assert_eq!(format_bullet_points(""), "");
    }

    #[test]
    fn never_starts_with_bare_bullet() {
        let out = format_bullet_points("• first • second");
        assert!(out.starts_with("\n• "));
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "* a\n* b",
            "lead • x •• y",
            "  *  spaced   out  *  ",
            "no bullets at all",
            "\n• already\n• formatted",
            "",
            "***",
        ];
        for input in inputs {
            let once = format_bullet_points(input);
            assert_eq!(format_bullet_points(&once), once, "input: {input:?}");
        }
    }
}

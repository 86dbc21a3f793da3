/// Canonicalize a CSV cell before matching it against a closed token set:
/// strip BOM and zero-width characters, collapse whitespace runs into a
/// single underscore, and lowercase. "Walls And Ceiling" and
/// "walls_and_ceiling" normalize to the same token.
pub(crate) fn normalize_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_cell;

    #[test]
    fn collapses_case_and_whitespace() {
        assert_eq!(normalize_cell("  Walls And  Ceiling "), "walls_and_ceiling");
        assert_eq!(normalize_cell("Zone A"), "zone_a");
    }

    #[test]
    fn strips_invisible_characters() {
        assert_eq!(normalize_cell("\u{feff}wallpaper\u{200b}"), "wallpaper");
    }
}

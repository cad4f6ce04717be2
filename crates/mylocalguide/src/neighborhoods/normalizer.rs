/// Upper-cases and collapses whitespace so keyword checks are substring tests.
pub(crate) fn normalize_for_match(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace('\u{2019}', "'").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_upper_cases() {
        assert_eq!(
            normalize_for_match("\u{feff}Pier   39,\tFisherman\u{2019}s  Wharf"),
            "PIER 39, FISHERMAN'S WHARF"
        );
    }
}

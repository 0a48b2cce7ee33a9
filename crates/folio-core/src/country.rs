//! Country dial-code selector: numeric ordering and label search.

/// Numeric dial code formed by the digits of an option value (`"+1-684"` → 1684).
pub fn dial_code(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Sorts options ascending by dial code, keeping the first (placeholder)
/// option in place. Values without digits sort last; ties keep their order.
pub fn sort_by_dial_code<T, F>(options: &mut [T], value_of: F)
where
    F: Fn(&T) -> &str,
{
    let Some((_placeholder, rest)) = options.split_first_mut() else {
        return;
    };
    rest.sort_by_key(|option| dial_code(value_of(option)).unwrap_or(u64::MAX));
}

/// Case-insensitive substring match of a search term against an option label.
pub fn matches_search(label: &str, term: &str) -> bool {
    label.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_code() {
        assert_eq!(dial_code("+91"), Some(91));
        assert_eq!(dial_code("+1-684"), Some(1684));
        assert_eq!(dial_code(""), None);
        assert_eq!(dial_code("code"), None);
    }

    #[test]
    fn test_sort_keeps_placeholder_first() {
        let mut options = vec!["", "+91", "+1", "+44", "+7", "+358"];
        sort_by_dial_code(&mut options, |v| *v);
        assert_eq!(options, vec!["", "+1", "+7", "+44", "+91", "+358"]);
    }

    #[test]
    fn test_sort_is_stable_and_puts_garbage_last() {
        let mut options = vec![
            ("Select", ""),
            ("Canada", "+1"),
            ("Other", "n/a"),
            ("United States", "+1"),
            ("Russia", "+7"),
        ];
        sort_by_dial_code(&mut options, |(_, value)| *value);
        let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Select", "Canada", "United States", "Russia", "Other"]);
    }

    #[test]
    fn test_sort_handles_empty_list() {
        let mut options: Vec<&str> = Vec::new();
        sort_by_dial_code(&mut options, |v| *v);
        assert!(options.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("India (+91)", "ind"));
        assert!(matches_search("India (+91)", "INDIA"));
        assert!(matches_search("India (+91)", "+91"));
        assert!(matches_search("India (+91)", ""));
        assert!(!matches_search("India (+91)", "fra"));
    }
}

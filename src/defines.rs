//! Helpers for the semicolon-delimited compile-define lists game engines
//! keep in their project settings.
//!
//! This crate's own gate is the `disable` cargo feature. Hosts that mirror
//! the gate in an engine-side define list can edit that list here; all
//! functions are pure string manipulation.

/// Conventional symbol gating instrumentation in host project settings.
pub const PROFILING_SYMBOL: &str = "ENABLE_PROFILING";

/// Split a define list on `;`, dropping blank and whitespace-only entries.
pub fn split_defines(list: &str) -> Vec<&str> {
    list.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether `symbol` is present in `list`.
pub fn has_define(list: &str, symbol: &str) -> bool {
    split_defines(list).iter().any(|s| *s == symbol)
}

/// Append `symbol` to `list` unless it is already present.
pub fn add_define(list: &str, symbol: &str) -> String {
    let mut defines = split_defines(list);
    if !defines.iter().any(|s| *s == symbol) {
        defines.push(symbol);
    }
    defines.join(";")
}

/// Remove every occurrence of `symbol` from `list`.
pub fn remove_define(list: &str, symbol: &str) -> String {
    split_defines(list)
        .into_iter()
        .filter(|s| *s != symbol)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let once = add_define("", PROFILING_SYMBOL);
        assert_eq!(once, "ENABLE_PROFILING");

        let twice = add_define(&once, PROFILING_SYMBOL);
        assert_eq!(twice, once);
    }

    #[test]
    fn add_preserves_existing_symbols() {
        let list = add_define("UNITY_SERVER;DEVELOPMENT_BUILD", PROFILING_SYMBOL);
        assert_eq!(list, "UNITY_SERVER;DEVELOPMENT_BUILD;ENABLE_PROFILING");
    }

    #[test]
    fn remove_is_idempotent_and_keeps_the_rest() {
        let list = "UNITY_SERVER;ENABLE_PROFILING;DEVELOPMENT_BUILD";
        let removed = remove_define(list, PROFILING_SYMBOL);
        assert_eq!(removed, "UNITY_SERVER;DEVELOPMENT_BUILD");
        assert_eq!(remove_define(&removed, PROFILING_SYMBOL), removed);
    }

    #[test]
    fn blank_fragments_are_dropped() {
        assert_eq!(split_defines("A; ;B;;"), vec!["A", "B"]);
        assert!(!has_define(";;", PROFILING_SYMBOL));
    }

    #[test]
    fn has_define_matches_whole_symbols_only() {
        assert!(has_define("ENABLE_PROFILING", PROFILING_SYMBOL));
        assert!(!has_define("ENABLE_PROFILING_EXTRA", PROFILING_SYMBOL));
    }
}

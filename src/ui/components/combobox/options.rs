//! Option data and the filter/group passes that feed the popup list.

use crate::utils::text::contains_ignore_case;

/// A selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub value: String,
    pub label: String,
    /// Decorative marker shown before the label
    pub icon: Option<&'static str>,
    /// Presentational cluster; has no effect on filtering or selection
    pub group: Option<String>,
}

impl ComboOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
            group: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Options whose label contains `query`, ignoring case, in their original order
pub fn filter_options<'a>(options: &'a [ComboOption], query: &str) -> Vec<&'a ComboOption> {
    options
        .iter()
        .filter(|option| contains_ignore_case(&option.label, query))
        .collect()
}

/// One line of the popup list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRow<'a> {
    Header(&'a str),
    Item(&'a ComboOption),
}

impl<'a> OptionRow<'a> {
    pub fn option(&self) -> Option<&'a ComboOption> {
        match *self {
            OptionRow::Item(option) => Some(option),
            OptionRow::Header(_) => None,
        }
    }
}

/// Lay out filtered options for display.
///
/// Ungrouped options come first in their original order, followed by one
/// cluster per group in order of first appearance. Each cluster is preceded by
/// a header row. Groups and options are never re-sorted.
pub fn group_options<'a>(filtered: &[&'a ComboOption]) -> Vec<OptionRow<'a>> {
    let mut rows = Vec::with_capacity(filtered.len());
    let mut groups: Vec<(&'a str, Vec<&'a ComboOption>)> = Vec::new();

    for &option in filtered {
        match option.group.as_deref() {
            None => rows.push(OptionRow::Item(option)),
            Some(name) => match groups.iter_mut().find(|(group, _)| *group == name) {
                Some((_, members)) => members.push(option),
                None => groups.push((name, vec![option])),
            },
        }
    }

    for (name, members) in groups {
        rows.push(OptionRow::Header(name));
        rows.extend(members.into_iter().map(OptionRow::Item));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ComboOption> {
        vec![
            ComboOption::new("a", "Alpha").with_group("G1"),
            ComboOption::new("b", "Beta"),
            ComboOption::new("c", "Gamma").with_group("G2"),
            ComboOption::new("d", "Delta").with_group("G1"),
            ComboOption::new("e", "Epsilon"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let options = sample();
        let filtered = filter_options(&options, "");
        let values: Vec<_> = filtered.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let options = sample();
        let filtered = filter_options(&options, "LT");
        let values: Vec<_> = filtered.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["d"]);
    }

    #[test]
    fn test_filter_ignores_values_and_groups() {
        let options = sample();
        assert!(filter_options(&options, "G1").is_empty());
        assert!(filter_options(&options, "b").iter().all(|o| o.value == "b"));
    }

    #[test]
    fn test_ungrouped_first_then_groups_by_first_appearance() {
        let options = sample();
        let filtered = filter_options(&options, "");
        let rows = group_options(&filtered);

        let rendered: Vec<String> = rows
            .iter()
            .map(|row| match row {
                OptionRow::Header(name) => format!("[{name}]"),
                OptionRow::Item(option) => option.label.clone(),
            })
            .collect();

        assert_eq!(
            rendered,
            ["Beta", "Epsilon", "[G1]", "Alpha", "Delta", "[G2]", "Gamma"]
        );
    }

    #[test]
    fn test_group_without_survivors_has_no_header() {
        let options = vec![
            ComboOption::new("a", "Alpha").with_group("G1"),
            ComboOption::new("b", "Beta"),
        ];
        let filtered = filter_options(&options, "bet");
        let rows = group_options(&filtered);

        assert_eq!(rows, vec![OptionRow::Item(&options[1])]);
    }
}

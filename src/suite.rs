//! Reconstructs the nested suite hierarchy from the flat result list the
//! runner reports, where each test carries its chain of ancestor titles.

use crate::model::TestResult;

/// A node in the reconstructed suite hierarchy.
///
/// The synthetic root is the only node with an empty title; it never
/// produces bracketing output of its own. Children keep first-seen order
/// and tests keep arrival order.
#[derive(Debug, Default)]
pub struct SuiteNode<'a> {
    pub title: &'a str,
    pub suites: Vec<SuiteNode<'a>>,
    pub tests: Vec<&'a TestResult>,
}

impl<'a> SuiteNode<'a> {
    fn named(title: &'a str) -> Self {
        Self {
            title,
            suites: Vec::new(),
            tests: Vec::new(),
        }
    }
}

/// Groups a flat, ordered result list into a suite tree.
///
/// Suites sharing a title at the same nesting level are merged into one
/// node; that is how the runner itself reports same-named suites, and the
/// display consumer relies on it. Tests with no ancestors land directly on
/// the root. No sorting happens anywhere.
pub fn group_by_suites(results: &[TestResult]) -> SuiteNode<'_> {
    let mut root = SuiteNode::default();
    for result in results {
        let mut target = &mut root;
        for title in &result.ancestor_titles {
            let idx = match target.suites.iter().position(|s| s.title == title.as_str()) {
                Some(idx) => idx,
                None => {
                    target.suites.push(SuiteNode::named(title));
                    target.suites.len() - 1
                }
            };
            target = &mut target.suites[idx];
        }
        target.tests.push(result);
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestStatus;

    fn test(title: &str, ancestors: &[&str]) -> TestResult {
        TestResult {
            title: title.to_string(),
            status: TestStatus::Passed,
            ancestor_titles: ancestors.iter().map(|s| s.to_string()).collect(),
            duration: None,
            failure_messages: Vec::new(),
        }
    }

    #[test]
    fn empty_input_yields_bare_root() {
        let root = group_by_suites(&[]);
        assert_eq!(root.title, "");
        assert!(root.suites.is_empty());
        assert!(root.tests.is_empty());
    }

    #[test]
    fn zero_ancestors_land_on_the_root() {
        let results = vec![test("a", &[]), test("b", &[])];
        let root = group_by_suites(&results);
        assert_eq!(root.tests.len(), 2);
        assert_eq!(root.tests[0].title, "a");
        assert_eq!(root.tests[1].title, "b");
        assert!(root.suites.is_empty());
    }

    #[test]
    fn same_ancestor_chain_merges_into_one_node() {
        let results = vec![
            test("adds", &["Calculator", "add"]),
            test("adds negatives", &["Calculator", "add"]),
        ];
        let root = group_by_suites(&results);
        assert_eq!(root.suites.len(), 1);
        let calculator = &root.suites[0];
        assert_eq!(calculator.title, "Calculator");
        assert!(calculator.tests.is_empty());
        assert_eq!(calculator.suites.len(), 1);
        let add = &calculator.suites[0];
        assert_eq!(add.title, "add");
        assert_eq!(add.tests.len(), 2);
    }

    #[test]
    fn children_keep_first_seen_order() {
        let results = vec![
            test("one", &["B"]),
            test("two", &["A"]),
            test("three", &["B"]),
        ];
        let root = group_by_suites(&results);
        let titles: Vec<&str> = root.suites.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(root.suites[0].tests.len(), 2);
    }

    #[test]
    fn same_title_at_different_depths_stays_distinct() {
        let results = vec![test("t1", &["outer"]), test("t2", &["outer", "outer"])];
        let root = group_by_suites(&results);
        assert_eq!(root.suites.len(), 1);
        let outer = &root.suites[0];
        assert_eq!(outer.tests.len(), 1);
        assert_eq!(outer.suites.len(), 1);
        assert_eq!(outer.suites[0].title, "outer");
        assert_eq!(outer.suites[0].tests.len(), 1);
    }
}

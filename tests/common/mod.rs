#![allow(clippy::uninlined_format_args)]

use std::collections::{BTreeSet, VecDeque};

/// Test that \p pattern fails to compile.
#[track_caller]
pub fn test_parse_fails(pattern: &str) {
    let res = epsnfa::Nfa::new(pattern);
    assert!(res.is_err(), "Pattern should not have parsed: {:?}", pattern);
}

/// Test that \p pattern fails to compile with an error whose text contains
/// \p expected_err.
#[track_caller]
pub fn test_1_error(pattern: &str, expected_err: &str) {
    let res = epsnfa::Nfa::new(pattern);
    assert!(res.is_err(), "Pattern should not have parsed: {:?}", pattern);

    let err = res.err().unwrap().to_string();
    assert!(
        err.contains(expected_err),
        "Error text '{}' did not contain '{}' for pattern {:?}",
        err,
        expected_err,
        pattern
    );
}

/// Compile a pattern, panicking with the pattern text if it does not compile.
#[track_caller]
pub fn compile(pattern: &str) -> TestNfa {
    match epsnfa::Nfa::new(pattern) {
        Ok(nfa) => TestNfa { nfa },
        Err(err) => panic!("Failed to compile {:?}: {}", pattern, err),
    }
}

/// A compiled automaton with "fluent" test helpers.
#[derive(Debug, Clone)]
pub struct TestNfa {
    pub nfa: epsnfa::Nfa,
}

impl TestNfa {
    /// Match \p input, panicking if matching returns an error.
    #[track_caller]
    pub fn matches(&self, input: &str) -> bool {
        match self.nfa.matches(input) {
            Ok(res) => res,
            Err(err) => panic!(
                "Matching {:?} against {:?} failed: {}",
                input,
                self.nfa.pattern(),
                err
            ),
        }
    }

    /// Test that \p input is matched.
    #[track_caller]
    pub fn test_matches(&self, input: &str) -> &Self {
        assert!(
            self.matches(input),
            "{:?} should have matched {:?}",
            self.nfa.pattern(),
            input
        );
        self
    }

    /// Test that \p input is not matched.
    #[track_caller]
    pub fn test_fails(&self, input: &str) -> &Self {
        assert!(
            !self.matches(input),
            "{:?} should not have matched {:?}",
            self.nfa.pattern(),
            input
        );
        self
    }
}

/// Reference reachability: a plain breadth-first traversal over an edge list.
pub fn bfs_reachable(node_count: usize, edges: &[(usize, usize)], sources: &[usize]) -> BTreeSet<usize> {
    let mut adj = vec![Vec::new(); node_count];
    for &(from, to) in edges {
        adj[from].push(to);
    }
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    for &src in sources {
        if seen.insert(src) {
            queue.push_back(src);
        }
    }
    while let Some(node) = queue.pop_front() {
        for &next in &adj[node] {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

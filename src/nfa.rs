//! Compilation of patterns to epsilon-transition NFAs.
//!
//! The automaton for a pattern of M characters has M+1 states. State `i` is
//! pattern position `i`: if the character there is a literal or `.`, the
//! state has a single consuming transition to `i + 1`. All other transitions
//! are epsilon edges held in a [`Digraph`]. State M is the accepting state.
//!
//! Construction is a single left-to-right scan. Open `(` and `|` positions
//! wait on an operator stack until the matching `)` wires up the group.

use crate::digraph::Digraph;
use crate::error::{Error, Malformed};
use crate::util::DebugCheckIndex;
use core::fmt;
use core::str::FromStr;
use log::debug;

/// Characters that are pattern syntax and may never appear in matched text.
pub const METACHARACTERS: [char; 4] = ['(', ')', '|', '*'];

#[inline]
pub(crate) fn is_metacharacter(c: char) -> bool {
    METACHARACTERS.contains(&c)
}

/// The state in which every simulation begins.
pub const START_STATE: usize = 0;

/// A compiled pattern: the epsilon graph plus the pattern text.
/// An Nfa is immutable once built and may be shared between threads.
#[derive(Debug, Clone)]
pub struct Nfa {
    pattern: Box<str>,

    // The pattern split into chars. Index i is both pattern position i and
    // state id i.
    re: Box<[char]>,

    // Epsilon transitions over states 0..=re.len().
    graph: Digraph,
}

impl Nfa {
    /// Compile `pattern`.
    /// An Error is returned if the parentheses or alternations are unbalanced,
    /// or if the pattern has nothing to match.
    pub fn new(pattern: &str) -> Result<Nfa, Error> {
        match compile(pattern) {
            Ok(nfa) => {
                debug!(
                    "compiled {:?}: {} states, {} epsilon edges",
                    pattern,
                    nfa.graph.node_count(),
                    nfa.graph.edge_count()
                );
                Ok(nfa)
            }
            Err(reason) => {
                debug!("rejected {:?}: {}", pattern, reason);
                Err(reason.into())
            }
        }
    }

    /// The pattern this automaton was built from.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern length M, in characters.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// The accepting state. This is always M.
    #[inline]
    pub fn accept_state(&self) -> usize {
        self.re.len()
    }

    /// The epsilon-transition graph. It has exactly M+1 nodes.
    #[inline]
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// \return the state reached by consuming `c` in `state`, if any.
    /// Only literal and `.` positions consume input.
    #[inline]
    pub(crate) fn step(&self, state: usize, c: char) -> Option<usize> {
        if state >= self.re.len() {
            return None;
        }
        let pc = *self.re.iat(state);
        if pc == c || pc == '.' {
            debug_assert!(!is_metacharacter(c));
            Some(state + 1)
        } else {
            None
        }
    }

    /// \return the character at a state, or None for the accepting state.
    fn char_at(&self, state: usize) -> Option<char> {
        self.re.get(state).copied()
    }

    fn is_consuming(&self, state: usize) -> bool {
        self.char_at(state).map_or(false, |c| !is_metacharacter(c))
    }

    /// Generate a human-readable representation of the NFA.
    pub fn to_readable_string(&self) -> String {
        let mut result = String::new();
        result.push_str(&format!("NFA States for {:?}:\n", self.pattern()));
        result.push_str("===========\n\n");

        for state in 0..=self.len() {
            let marker = match state {
                s if s == self.accept_state() => " (ACCEPT)",
                START_STATE => " (START)",
                _ => "",
            };
            let label = match self.char_at(state) {
                Some(c) => format!(" {}", format_char(c)),
                None => String::new(),
            };
            result.push_str(&format!("State {}{}{}\n", state, marker, label));

            let eps = self.graph.successors(state);
            if !eps.is_empty() {
                result.push_str("  ε-transitions:\n");
                for &target in eps {
                    result.push_str(&format!("    ε ──> {}\n", format_target(self, target)));
                }
            }

            if let Some(c) = self.char_at(state).filter(|_| self.is_consuming(state)) {
                result.push_str("  Char transition:\n");
                result.push_str(&format!(
                    "    {} ──> {}\n",
                    format_char(c),
                    format_target(self, state + 1)
                ));
            }

            if eps.is_empty() && !self.is_consuming(state) && state != self.accept_state() {
                result.push_str("  (no transitions)\n");
            }

            result.push('\n');
        }

        result
    }
}

/// Compile a pattern, producing the automaton or the reason it is malformed.
fn compile(pattern: &str) -> Result<Nfa, Malformed> {
    let re: Box<[char]> = pattern.chars().collect();
    let m = re.len();
    if m == 0 {
        return Err(Malformed::Empty);
    }
    if re.iter().all(|&c| is_metacharacter(c)) {
        return Err(Malformed::NoAtoms);
    }

    let mut graph = Digraph::new(m + 1);
    // Positions of unmatched '(' and '|'.
    let mut ops: Vec<usize> = Vec::new();
    for i in 0..m {
        // Leftmost state of the unit ending at i: i itself for a single
        // character, or the '(' for a group.
        let mut lp = i;
        match re[i] {
            '(' | '|' => ops.push(i),
            ')' => {
                let top = ops
                    .pop()
                    .ok_or(Malformed::UnmatchedClose { position: i })?;
                if re[top] == '|' {
                    let or = top;
                    lp = ops
                        .pop()
                        .ok_or(Malformed::OrphanAlternation { position: or })?;
                    if re[lp] == '|' {
                        return Err(Malformed::ChainedAlternation { position: or });
                    }
                    // Left branch skips past the right; right branch exits at ')'.
                    graph.add_edge(lp, or + 1);
                    graph.add_edge(or, i);
                } else {
                    lp = top;
                }
            }
            _ => {}
        }

        if re.get(i + 1) == Some(&'*') {
            graph.add_edge(lp, i + 1);
            graph.add_edge(i + 1, lp);
        }

        if matches!(re[i], '(' | '*' | ')') {
            graph.add_edge(i, i + 1);
        }
    }

    if let Some(&position) = ops.first() {
        return Err(Malformed::Unclosed {
            c: re[position],
            position,
        });
    }

    debug_assert_eq!(graph.node_count(), m + 1);
    Ok(Nfa {
        pattern: pattern.into(),
        re,
        graph,
    })
}

/// Compile `pattern` into an automaton.
/// This is a convenience for [`Nfa::new`].
#[inline]
pub fn build(pattern: &str) -> Result<Nfa, Error> {
    Nfa::new(pattern)
}

impl FromStr for Nfa {
    type Err = Error;

    /// Attempts to compile a string into an automaton.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}

/// Format a pattern character in a readable way.
fn format_char(c: char) -> String {
    match c {
        '.' => "any".to_string(),
        ' ' => "'\\s'".to_string(),
        '\t' => "'\\t'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\'' => "'\\''".to_string(),
        c if c.is_control() => format!("U+{:04X}", c as u32),
        c => format!("'{}'", c),
    }
}

fn format_target(nfa: &Nfa, target: usize) -> String {
    match target {
        t if t == nfa.accept_state() => "ACCEPT".to_string(),
        START_STATE => "START".to_string(),
        t => t.to_string(),
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NFA({} states)", self.len() + 1)?;
        for state in 0..=self.len() {
            let marker = match state {
                s if s == self.accept_state() => "A",
                START_STATE => "S",
                _ => " ",
            };
            write!(f, "[{}{}]", marker, state)?;

            if self.is_consuming(state) {
                if let Some(c) = self.char_at(state) {
                    write!(f, " {}→{}", format_char(c), state + 1)?;
                }
            }
            for target in self.graph.successors(state) {
                write!(f, " ε→{}", target)?;
            }

            if state < self.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

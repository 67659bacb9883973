/*!

# epsnfa - regular expression recognition with an epsilon-transition NFA

This crate compiles a small regular expression language into a
nondeterministic finite automaton and decides whether a string is matched by
it, in its entirety.

# Example: test if a string matches

```rust
use epsnfa::Nfa;
let nfa = Nfa::new("(A*B|AC)D").unwrap();
assert!(nfa.matches("AAAABD").unwrap());
assert!(!nfa.matches("AC").unwrap());
```

# Supported Syntax

- Literal characters, which match themselves.
- `.`, which matches any single character.
- Concatenation, written by juxtaposition.
- `*`, zero or more repetitions of the preceding character or parenthesized group.
- `|`, binary alternation. It must be enclosed in parentheses: `(A|B)`.
- `(` and `)` for grouping.

There are no character classes, bounded repetitions, anchors, escapes or
capture groups. Matching is always against the whole string; there is no
substring search.

The characters `(`, `)`, `|` and `*` are reserved and may not appear in text
being matched. Matching fails when it reaches one, unless it has already
found that no match is possible:

```rust
use epsnfa::{Error, Nfa};
let nfa = Nfa::new("A*B").unwrap();
let err = nfa.matches("A*B").unwrap_err();
assert_eq!(err, Error::InvalidCharacterInText { c: '*', position: 1 });
assert_eq!(nfa.matches("C*"), Ok(false));
```

Unbalanced patterns are rejected when compiling:

```rust
use epsnfa::{Malformed, Nfa};
let err = Nfa::new("(AB").unwrap_err();
assert_eq!(err.malformed(), Some(Malformed::Unclosed { c: '(', position: 0 }));
```

# Architecture

A pattern of M characters produces an automaton with M+1 states. State `i`
is pattern position `i`, and state M accepts. Literals and `.` consume one
character and advance to the next state; everything else is expressed as
epsilon transitions in a [`Digraph`], built in one pass with an operator
stack.

Matching keeps the set of active states. After each character, the states
that can consume it are advanced, and the set is replaced by everything
reachable from them over epsilon transitions. The text matches if the
accepting state is active at the end. Work is O(M) per character.

An [`Nfa`] is immutable once compiled, so one automaton may be shared by any
number of threads matching concurrently.

# Logging

Compilation and matching emit `debug` and `trace` records through the [`log`]
crate. No logger is installed by this crate.

# Crate features

- **prohibit-unsafe**. Use checked indexing in the traversal loops, even in release builds.

*/

#![warn(clippy::all)]

pub use crate::digraph::{Digraph, StateSet};
pub use crate::error::{Error, Malformed};
pub use crate::nfa::{build, Nfa, METACHARACTERS, START_STATE};

mod digraph;
mod error;
mod nfa;
mod simulate;
mod util;

//! Bracket validation and jump table construction

use {crate::opcode, derive_more::Display, hashbrown::HashMap};

/// Program validation error kind
#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// `[` without a matching `]` before the end of the program
    #[display(fmt = "unmatched loop start")]
    UnmatchedLoopStart,
    /// `]` without a preceding open `[`
    #[display(fmt = "unmatched loop end")]
    UnmatchedLoopEnd,
}

/// Error
#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
#[display(fmt = "{} at byte {}", kind, index)]
pub struct Error {
    /// Kind
    pub kind: ErrorKind,
    /// Location in source
    pub index: usize,
}

impl std::error::Error for Error {}

/// Precomputed branch targets
///
/// For `[` at `i` matched with `]` at `j` the table holds `i → j + 1` and
/// `j → i + 1`. Any other position has no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JumpTable {
    targets: HashMap<usize, usize>,
}

impl JumpTable {
    /// Branch target of the bracket at `at`
    #[inline]
    pub fn target(&self, at: usize) -> Option<usize> {
        self.targets.get(&at).copied()
    }

    /// Number of matched loops
    pub fn loops(&self) -> usize {
        self.targets.len() / 2
    }
}

/// Check bracket balance and build the jump table in one left-to-right pass
pub fn validate(program: &[u8]) -> Result<JumpTable, Error> {
    let mut targets = HashMap::new();
    let mut open = Vec::new();

    for (index, &op) in program.iter().enumerate() {
        match op {
            opcode::JZ => open.push(index),
            opcode::JNZ => {
                let start = open
                    .pop()
                    .ok_or(Error { kind: ErrorKind::UnmatchedLoopEnd, index })?;
                targets.insert(start, index + 1);
                targets.insert(index, start + 1);
            }
            _ => (),
        }
    }

    match open.first() {
        Some(&index) => Err(Error { kind: ErrorKind::UnmatchedLoopStart, index }),
        None => Ok(JumpTable { targets }),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*};

    #[test]
    fn empty_program() {
        let table = validate(b"").unwrap();
        assert_eq!(table.loops(), 0);
    }

    #[test]
    fn single_loop() {
        let table = validate(b"+[-]").unwrap();
        assert_eq!(table.target(1), Some(4));
        assert_eq!(table.target(3), Some(2));
        assert_eq!(table.target(0), None);
        assert_eq!(table.target(2), None);
    }

    #[test]
    fn nested_loops() {
        //                     012345678
        let table = validate(b"[a[b[]c]]").unwrap();
        assert_eq!(table.loops(), 3);
        assert_eq!(table.target(0), Some(9));
        assert_eq!(table.target(8), Some(1));
        assert_eq!(table.target(2), Some(8));
        assert_eq!(table.target(7), Some(3));
        assert_eq!(table.target(4), Some(6));
        assert_eq!(table.target(5), Some(5));
    }

    #[test]
    fn sibling_loops() {
        let table = validate(b"[][-]").unwrap();
        assert_eq!(table.target(0), Some(2));
        assert_eq!(table.target(1), Some(1));
        assert_eq!(table.target(2), Some(5));
        assert_eq!(table.target(4), Some(3));
    }

    #[test]
    fn only_brackets_have_entries() {
        let table = validate(b"+-<>.,hello").unwrap();
        assert_eq!(table, JumpTable::default());
    }

    #[test]
    fn unmatched_end() {
        assert_eq!(
            validate(b"+[]]"),
            Err(Error { kind: ErrorKind::UnmatchedLoopEnd, index: 3 })
        );
        assert_eq!(validate(b"]["), Err(Error { kind: ErrorKind::UnmatchedLoopEnd, index: 0 }));
    }

    #[test]
    fn unmatched_start() {
        assert_eq!(
            validate(b"+[[]"),
            Err(Error { kind: ErrorKind::UnmatchedLoopStart, index: 1 })
        );
        assert_eq!(
            validate(b"[[["),
            Err(Error { kind: ErrorKind::UnmatchedLoopStart, index: 0 })
        );
    }

    #[test]
    fn error_display() {
        let err = Error { kind: ErrorKind::UnmatchedLoopStart, index: 12 };
        assert_eq!(err.to_string(), "unmatched loop start at byte 12");
    }

    /// Turn arbitrary choices into a bracket-balanced program
    fn balanced(choices: &[u8]) -> Vec<u8> {
        let mut depth = 0_usize;
        let mut program = Vec::with_capacity(choices.len());
        for &choice in choices {
            program.push(match choice {
                0 => {
                    depth += 1;
                    b'['
                }
                1 if depth > 0 => {
                    depth -= 1;
                    b']'
                }
                1 | 2 => b'+',
                _ => b'x',
            });
        }
        program.extend(std::iter::repeat(b']').take(depth));
        program
    }

    proptest! {
        #[test]
        fn targets_point_past_partner(choices in proptest::collection::vec(0_u8..4, 0..128)) {
            let program = balanced(&choices);
            let table = validate(&program).unwrap();

            for (at, &op) in program.iter().enumerate() {
                match op {
                    b'[' => {
                        let after_end = table.target(at).unwrap();
                        prop_assert!(after_end > at + 1);
                        prop_assert_eq!(program[after_end - 1], b']');
                        prop_assert_eq!(table.target(after_end - 1), Some(at + 1));
                    }
                    b']' => {
                        let after_start = table.target(at).unwrap();
                        prop_assert!(after_start <= at);
                        prop_assert_eq!(program[after_start - 1], b'[');
                        prop_assert_eq!(table.target(after_start - 1), Some(at + 1));
                    }
                    _ => {
                        prop_assert_eq!(table.target(at), None);
                    }
                }
            }
        }
    }
}

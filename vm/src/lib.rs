//! Tape Virtual Machine
//!
//! Executes programs of the eight-instruction tape language over a bounded
//! byte array. Brackets are resolved ahead of time into a [`JumpTable`],
//! so branching at run time is a table lookup.
//!
//! # Usage
//! ```
//! use tapevm::{console::IoConsole, Vm, VmRunOk};
//!
//! let console = IoConsole::new(&b"A"[..], Vec::new());
//! let mut vm = Vm::<_, 0>::new(b",.", console).unwrap();
//! assert_eq!(vm.run(), Ok(VmRunOk::End));
//! assert_eq!(vm.io.output(), b"A");
//! ```

// # General notice:
// - Data pointer may leave the tape freely, only cell accesses are checked
// - Instruction pointer equal to program length means halted

pub mod console;
pub mod mem;
pub mod opcode;
pub mod validate;

mod vmrun;


use {
    derive_more::Display,
    log::debug,
    mem::{OutOfRange, Tape, TAPE_CAPACITY},
    std::io,
    validate::JumpTable,
};

/// Tape Virtual Machine
///
/// - `TIMER_QUOTIENT`: instructions executed before [`Vm::run`] yields
///   [`VmRunOk::Timer`], `0` never yields
/// - `CAPACITY`: number of tape cells
pub struct Vm<Io, const TIMER_QUOTIENT: usize, const CAPACITY: usize = TAPE_CAPACITY> {
    /// Memory tape
    pub tape: Tape<CAPACITY>,

    /// Console used by `.` and `,`
    pub io: Io,

    /// Instruction pointer
    pub ip: usize,

    /// Data pointer
    pub dp: isize,

    /// Program text
    program: Box<[u8]>,

    /// Resolved bracket targets
    jumps: JumpTable,

    /// Program timer
    timer: usize,
}

impl<Io, const TIMER_QUOTIENT: usize, const CAPACITY: usize> Vm<Io, TIMER_QUOTIENT, CAPACITY> {
    /// Create a new VM over a copy of `program`
    ///
    /// Fails if brackets in `program` do not balance.
    pub fn new(program: &[u8], io: Io) -> Result<Self, validate::Error> {
        let jumps = validate::validate(program)?;
        debug!("code size {} bytes, {} loops", program.len(), jumps.loops());

        Ok(Self {
            tape: Tape::new(),
            io,
            ip: 0,
            dp: 0,
            program: program.into(),
            jumps,
            timer: 0,
        })
    }

    /// Program text
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Resolved bracket targets
    pub fn jump_table(&self) -> &JumpTable {
        &self.jumps
    }

    /// Instruction pointer has reached the end of the program
    #[inline(always)]
    pub fn halted(&self) -> bool {
        self.ip == self.program.len()
    }
}

/// Virtual machine halt error
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum VmRunError {
    /// Cell access outside of the tape
    #[display(fmt = "tape index {_0} out of range")]
    TapeOutOfRange(isize),

    /// Tried to advance past the end of the program
    #[display(fmt = "instruction pointer too large ({_0})")]
    IpOverflow(usize),

    /// Bracket without a jump table entry
    #[display(fmt = "unreachable: no jump target at {_0}")]
    Unreachable(usize),

    /// Console read or write failed
    #[display(fmt = "console: {_0}")]
    Console(io::ErrorKind),
}

impl std::error::Error for VmRunError {}

impl From<OutOfRange> for VmRunError {
    fn from(value: OutOfRange) -> Self {
        Self::TapeOutOfRange(value.0)
    }
}

impl From<io::Error> for VmRunError {
    fn from(value: io::Error) -> Self {
        Self::Console(value.kind())
    }
}

/// Virtual machine halt ok
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VmRunOk {
    /// Program has reached its end
    End,

    /// Program was interrupted by a timer
    Timer,
}

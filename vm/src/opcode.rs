//! Instruction bytes
//!
//! Every other byte in a program is a comment.

/// Move data pointer right
pub const INC_DP: u8 = b'>';
/// Move data pointer left
pub const DEC_DP: u8 = b'<';
/// Increment current cell
pub const INC: u8 = b'+';
/// Decrement current cell
pub const DEC: u8 = b'-';
/// Write current cell to console
pub const OUT: u8 = b'.';
/// Read console into current cell
pub const IN: u8 = b',';
/// Loop start, skip body on zero
pub const JZ: u8 = b'[';
/// Loop end, re-enter body on non-zero
pub const JNZ: u8 = b']';

/// Instruction mnemonic for tracing
pub fn name(op: u8) -> &'static str {
    match op {
        INC_DP => "incdp",
        DEC_DP => "decdp",
        INC => "incdata",
        DEC => "decdata",
        OUT => "output",
        IN => "input",
        JZ => "open bracket",
        JNZ => "close bracket",
        _ => "nop",
    }
}

//! The dispatch loop

use {
    super::{console::Console, opcode, Vm, VmRunError, VmRunOk},
    log::trace,
};

impl<Io, const TIMER_QUOTIENT: usize, const CAPACITY: usize> Vm<Io, TIMER_QUOTIENT, CAPACITY>
where
    Io: Console,
{
    /// Execute program
    ///
    /// Runs until the instruction pointer reaches the end of the program or,
    /// with a non-zero `TIMER_QUOTIENT`, until the timer fires. Calling it
    /// again after [`VmRunOk::Timer`] resumes where execution stopped.
    pub fn run(&mut self) -> Result<VmRunOk, VmRunError> {
        use opcode::*;
        loop {
            let Some(&op) = self.program.get(self.ip) else {
                return Ok(VmRunOk::End);
            };

            trace!("ip={} dp={} {}", self.ip, self.dp, opcode::name(op));
            match op {
                INC_DP => {
                    self.dp = self.dp.wrapping_add(1);
                    self.bump_ip()?;
                }
                DEC_DP => {
                    self.dp = self.dp.wrapping_sub(1);
                    self.bump_ip()?;
                }
                INC => self.cell_op(u8::wrapping_add)?,
                DEC => self.cell_op(u8::wrapping_sub)?,
                OUT => {
                    let byte = self.tape.read(self.dp)?;
                    self.io.write_byte(byte)?;
                    self.bump_ip()?;
                }
                IN => {
                    let byte = self.read_input()?;
                    self.tape.write(self.dp, byte)?;
                    self.bump_ip()?;
                }
                JZ => self.branch(|cell| cell == 0)?,
                JNZ => self.branch(|cell| cell != 0)?,
                _ => self.bump_ip()?,
            }

            if TIMER_QUOTIENT != 0 {
                self.timer = self.timer.wrapping_add(1);
                if self.timer % TIMER_QUOTIENT == 0 {
                    trace!("timer fired at ip={}", self.ip);
                    return Ok(VmRunOk::Timer);
                }
            }
        }
    }

    /// Advance to the next instruction
    #[inline(always)]
    fn bump_ip(&mut self) -> Result<(), VmRunError> {
        if self.halted() {
            return Err(VmRunError::IpOverflow(self.ip));
        }
        self.ip += 1;
        Ok(())
    }

    /// Apply `op` with one to the current cell
    #[inline(always)]
    fn cell_op(&mut self, op: fn(u8, u8) -> u8) -> Result<(), VmRunError> {
        let cell = self.tape.read(self.dp)?;
        self.tape.write(self.dp, op(cell, 1))?;
        self.bump_ip()
    }

    /// Jump to the bracket's partner if `cond` holds for the current cell
    #[inline(always)]
    fn branch(&mut self, cond: fn(u8) -> bool) -> Result<(), VmRunError> {
        if !cond(self.tape.read(self.dp)?) {
            return self.bump_ip();
        }

        let target = self.jumps.target(self.ip).ok_or(VmRunError::Unreachable(self.ip))?;
        if target > self.program.len() {
            return Err(VmRunError::IpOverflow(target));
        }
        trace!("jump {} -> {}", self.ip, target);
        self.ip = target;
        Ok(())
    }

    /// Block until a byte other than a newline arrives
    fn read_input(&mut self) -> Result<u8, VmRunError> {
        loop {
            match self.io.read_byte()? {
                None | Some(b'\n') => continue,
                Some(byte) => break Ok(byte),
            }
        }
    }
}

#![no_main]

use {
    libfuzzer_sys::fuzz_target,
    std::io,
    tapevm::{console::IoConsole, Vm, VmRunError},
};

fuzz_target!(|data: &[u8]| {
    // Input never ends, output is discarded
    let console = IoConsole::new(io::repeat(b'a'), io::sink());
    if let Ok(mut vm) = Vm::<_, 16384, 4096>::new(data, console) {
        match vm.run() {
            Ok(_) | Err(VmRunError::TapeOutOfRange(_)) => (),
            Err(e) => panic!("{e} at ip {}", vm.ip),
        }
    }
});

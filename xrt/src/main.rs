//! Tape VM Experimental Runtime
mod image;
mod logger;

use {
    argh::FromArgs,
    color_eyre::{eyre::WrapErr, Result},
    log::{info, trace},
    std::{path::PathBuf, process::exit},
    tapevm::{console::IoConsole, Vm, VmRunOk},
};

/// Instructions executed between timer interrupts
const QUANTUM: usize = 1 << 20;

/// Run a tape program
#[derive(FromArgs)]
struct Args {
    /// path to the program source
    #[argh(positional)]
    path: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logger::init()?;
    let args: Args = argh::from_env();

    info!("Loading program from \"{}\"", args.path.display());
    let image = image::load(&args.path)
        .wrap_err_with(|| format!("loading {}", args.path.display()))?;

    let mut vm = Vm::<_, QUANTUM>::new(&image, IoConsole::stdio())
        .wrap_err_with(|| format!("validating {}", args.path.display()))?;
    drop(image);

    let stat = loop {
        match vm.run() {
            Ok(VmRunOk::Timer) => trace!("quantum elapsed, ip={} dp={}", vm.ip, vm.dp),
            Ok(VmRunOk::End) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    if let Err(e) = stat {
        eprintln!("[E] Runtime error: {e}\n    ip={} dp={}", vm.ip, vm.dp);
        exit(2);
    }

    Ok(())
}

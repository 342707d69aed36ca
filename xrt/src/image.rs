//! Program source loading

use {
    memmap2::Mmap,
    std::{fs::File, io, ops::Deref, path::Path},
};

/// Program source mapped from a file
pub enum Image {
    /// Zero-length file, cannot be mapped
    Empty,
    Mapped(Mmap),
}

impl Deref for Image {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Mapped(map) => &map[..],
        }
    }
}

/// Map the file at `path` read-only
pub fn load(path: &Path) -> io::Result<Image> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Image::Empty);
    }

    // SAFETY: The mapping is private and read-only; the program source is
    // copied into the VM before anything executes.
    let map = unsafe { Mmap::map(&file)? };
    Ok(Image::Mapped(map))
}

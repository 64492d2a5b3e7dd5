/// The banner printed before the crash.
use std::io::{self, Write};

/// Fixed banner text, shared with the integration tests.
pub const BANNER: &str = include_str!("banner.txt");

/// Write the banner and flush.
///
/// The flush matters: the process faults right after this returns, so
/// anything still sitting in a buffer would be lost.
///
/// # Errors
///
/// Returns the underlying I/O error if the write or flush fails.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(BANNER.as_bytes())?;
    out.flush()
}

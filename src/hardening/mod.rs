/// Process hardening: keep the crash out of core dumps and debuggers.
pub mod dumpable;
pub mod errors;

pub use dumpable::{disable_dumpable, is_dumpable};
pub use errors::HardeningError;

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! bigmonke — crash-test payload for binary obfuscators and packers.
//!
//! Hides from core dumps, prints a banner, then faults on a null write.
//! Arguments and environment are ignored.

mod banner;
mod diag;
mod fault;
mod hardening;

use std::io;

fn main() {
    {
        let _step = diag::Step::start("disable_dumpable");
        if let Err(err) = hardening::disable_dumpable() {
            diag::note("disable_dumpable", &err);
        }
    }
    if diag::ENABLED {
        match hardening::is_dumpable() {
            Ok(dumpable) => diag::note("dumpable", &dumpable),
            Err(err) => diag::note("is_dumpable", &err),
        }
    }

    {
        let _step = diag::Step::start("write_banner");
        let _ = banner::write_banner(&mut io::stdout().lock());
    }

    fault::crash()
}

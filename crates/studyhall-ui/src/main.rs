#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_docs)]
//! Studyhall UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    studyhall_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"The studyhall-ui binary is intended for wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`.\n",
    )?;
    Ok(())
}

//! Decodes standard input through a deliberately tiny read buffer and
//! prints what arrived after each read.
//!
//! ```sh
//! printf 'h\xc3\xa9llo \xf0\x9f\x98\x80\n' | cargo run --example chunked_stdin -- 3
//! ```
#![allow(missing_docs)]

use std::{io, process::ExitCode};

use utf8modem::{ReadDecoder, Utf8Decoder};

fn main() -> ExitCode {
    let capacity = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4);

    let decoder = Utf8Decoder::new(Vec::<u16>::new());
    let mut adapter = ReadDecoder::with_capacity(io::stdin().lock(), decoder, capacity);
    loop {
        match adapter.read_chunk() {
            Ok(0) => break,
            Ok(n) => {
                let units = std::mem::take(adapter.decoder_mut().sink_mut());
                println!("{n:>2} bytes -> {units:04X?}");
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let (_, mut decoder) = adapter.into_parts();
    if let Err(err) = decoder.finalize() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    println!("decoded {} bytes", decoder.position());
    ExitCode::SUCCESS
}

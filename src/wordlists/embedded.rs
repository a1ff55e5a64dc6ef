//! Embedded secret list
//!
//! Compiled into the binary at build time from `data/secrets.txt`.

include!(concat!(env!("OUT_DIR"), "/secrets.rs"));

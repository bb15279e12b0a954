#![no_std]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod clock;
pub mod diag;
pub mod port;
pub mod prelude;
pub mod version;

#[cfg(test)]
pub(crate) mod mock;

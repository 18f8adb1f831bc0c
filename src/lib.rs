#![warn(missing_docs)]

//! # `bunnyhq`
//!
//! Solvers for the four puzzles met on the way into Easter Bunny Headquarters.
//! Each is independent of the others and takes its whole puzzle input as a `&str`.
//!
//! - [`walk`]: follow `R2, L3`-style turns across a city grid and report taxicab distances.
//! - [`keypad`]: move a finger over a keypad one `U`/`D`/`L`/`R` at a time and read off the code.
//! - [`triangle`]: count side triples that can form a triangle, read by rows or by columns.
//! - [`room`]: validate room checksums and decrypt their shift-ciphered names.
//!
//! # Keypads
//! A [`Keypad`] is a jagged table of optional labels, so shapes other than a square (like the diamond behind the bathroom door) are just different data.
//! Build a [`KeypadNavigator`] directly or through a [`KeypadBuilder`], then feed it instructions:
//!
//! ```rust
//! use bunnyhq::{Keypad, KeypadNavigator};
//!
//! let mut navigator = KeypadNavigator::new(Keypad::diamond(), '5').unwrap();
//! navigator.process("ULL\nRRDDD\nLURDL\nUUUUD").unwrap();
//! assert_eq!(navigator.code(), "5DB3");
//! ```
//!
//! Moves that would leave the keypad or land in a gap are ignored rather than treated as errors.
//! An unknown command, on the other hand, aborts the whole [`process`](KeypadNavigator::process) call.

pub use builder::KeypadBuilder;
pub use keypad::{Keypad, KeypadError, KeypadNavigator};
pub use location::{Location, Position};
pub use shape::SquareStep;

mod tests;
pub mod location;
pub mod shape;
pub mod builder;
pub mod keypad;
pub mod walk;
pub mod triangle;
pub mod room;
#[cfg(feature = "wasm")]
pub mod wasm;

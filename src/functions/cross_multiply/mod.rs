//! Cross-multiplication factoring of `Ax² + Dxy + By² + Gx + Hy + K`
//! into `(a1·x + b1·y + c1)(a2·x + b2·y + c2)`.
//!
//! Divisor enumeration, the constraint search, narration steps and
//! verification of interactive answers.

mod divisors;
mod search;
mod steps;
mod verify;

pub use divisors::*;
pub use search::*;
pub use steps::*;
pub use verify::*;

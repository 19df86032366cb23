mod amount;
mod check;
mod words;

pub use amount::*;
pub use check::*;
pub use words::*;

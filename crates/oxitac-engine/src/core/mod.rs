pub use self::{board::*, mark::*};

pub(crate) mod board;
pub(crate) mod mark;

pub mod forward;
pub mod inverse;
pub mod range;
pub mod trace;

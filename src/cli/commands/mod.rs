//! Command implementations

mod collect;
mod show;

pub use collect::collect;
pub use show::show;

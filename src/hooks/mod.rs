pub mod use_liveness;

pub use use_liveness::use_liveness;

//! Response simulation and the time/randomness ports it depends on.

pub mod ports;
pub mod responder;

pub use ports::{Clock, FixedRandom, RandomSource, SleepFuture, ThreadRandom, TokioClock};
pub use responder::{DEFAULT_RESPONSES, ReplyFuture, Responder, ResponseSimulator};

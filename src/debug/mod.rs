//! Debug/trace facilities. Not on the CPU hot path — only active when
//! instruction tracing is turned on, and mutually exclusive with the decode
//! cache (see [`crate::error::EmulatorError::CacheWithTrace`]).

pub mod trace;

//! Version probes.
//!
//! Each probe gathers one [`VersionString`](crate::version::VersionString)
//! and returns a tagged result instead of terminating the process; the
//! check runner composes them.

pub mod local;
pub mod remote;

pub use local::LocalVersionProbe;
pub use remote::RemoteVersionProbe;

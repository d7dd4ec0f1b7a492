//! Check module comparing deployed implementation bytecode with compiled artifacts
//!
//! For every `<Name>Impl.json` descriptor of a hardhat-deploy network directory, the
//! recorded bytecode is compared with the bytecode of the `<Name>.json` artifact found
//! in the artifacts tree.

mod cmd;
mod verify;

pub use cmd::*;
pub use verify::*;

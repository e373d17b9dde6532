pub mod copy;
pub mod install;
pub mod manifest;
pub mod resolve;
pub mod scaffold;
pub mod splice;

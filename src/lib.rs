//! sshpick
//!
//! Terminal browser for picking an ssh connection from a YAML record store.
//!
//! Pure core: `model` and `state` hold the browsing engine (filtering,
//! sorting, scrolling, marker selection). Impure shell: `source`, `config`,
//! `logging`, `launch` and `view` touch the filesystem, the terminal and
//! child processes.

pub mod config;
pub mod launch;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

// src/models/mod.rs
pub mod gbm;
pub mod ou_process;

pub use gbm::{simulate_gbm, Gbm};
pub use ou_process::OrnsteinUhlenbeck;

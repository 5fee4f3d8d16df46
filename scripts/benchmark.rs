// scripts/benchmark.rs
use sde_path::ensemble::{sample_paths, EnsembleConfig};
use sde_path::math_utils::Timer;
use sde_path::models::gbm::Gbm;
use sde_path::solvers::{EulerMaruyama, Milstein};
use std::f64;

fn main() {
    let t_horizon = 1.0;
    let n_steps = 252;
    let gbm = Gbm::new(0.05, 0.2);
    let cfg = EnsembleConfig {
        paths: 100_000,
        seed: 42,
    };

    println!("scheme,paths,steps,elapsed_ms,paths_per_sec");

    let euler = EulerMaruyama::new(|s, t| gbm.drift(s, t), |s, t| gbm.diffusion(s, t));
    let mut timer = Timer::new();
    timer.start();
    let paths = sample_paths(&cfg, 100.0, t_horizon, n_steps, &euler).expect("valid arguments");
    let elapsed = timer.elapsed_ms();
    println!(
        "euler_maruyama,{},{},{:.2},{:.0}",
        paths.len(),
        n_steps,
        elapsed,
        cfg.paths as f64 / (elapsed / 1000.0)
    );

    let milstein = Milstein::new(
        |s, t| gbm.drift(s, t),
        |s, t| gbm.diffusion(s, t),
        |s, t| gbm.diffusion_derivative(s, t),
    );
    timer.start();
    let paths = sample_paths(&cfg, 100.0, t_horizon, n_steps, &milstein).expect("valid arguments");
    let elapsed = timer.elapsed_ms();
    println!(
        "milstein,{},{},{:.2},{:.0}",
        paths.len(),
        n_steps,
        elapsed,
        cfg.paths as f64 / (elapsed / 1000.0)
    );
}

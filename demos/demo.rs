// demos/demo.rs
use sde_path::ensemble::{sample_paths, EnsembleConfig};
use sde_path::integrator::{euler_maruyama, euler_maruyama_with_variates, milstein_with_variates};
use sde_path::math_utils::Timer;
use sde_path::models::gbm::{simulate_gbm, Gbm};
use sde_path::models::ou_process::OrnsteinUhlenbeck;
use sde_path::output;
use sde_path::solvers::EulerMaruyama;
use std::f64;

fn main() {
    println!("Running sde-path demo\n");

    let t_horizon = 1.0;
    let n_steps = 252;
    let dt = t_horizon / n_steps as f64;

    // --- Closed-form GBM sampler ---
    println!("--- GBM sampler ---");
    let gbm_path = simulate_gbm(100.0, 0.05, 0.2, t_horizon, n_steps).expect("valid arguments");
    println!(
        "GBM path: {} points, terminal value {:.4}\n",
        gbm_path.len(),
        gbm_path.last().unwrap()
    );

    // --- Euler-Maruyama with internal increments ---
    println!("--- Euler-Maruyama (entropy increments) ---");
    let ou = OrnsteinUhlenbeck::new(0.5, 3.0, 0.2);
    let em_path = euler_maruyama(
        1.0,
        |x, t| ou.drift(x, t),
        |x, t| ou.diffusion(x, t),
        t_horizon,
        n_steps,
    )
    .expect("valid arguments");
    println!(
        "OU path: {} points, terminal value {:.4} (exact mean {:.4})\n",
        em_path.len(),
        em_path.last().unwrap(),
        ou.exact_mean(1.0, t_horizon)
    );

    // --- Deterministic run from supplied variates ---
    println!("--- Milstein vs Euler-Maruyama (shared variates) ---");
    let gbm = Gbm::new(0.05, 0.2);
    let variates: Vec<f64> = (0..n_steps)
        .map(|i| ((i % 13) as f64 - 6.0) / 3.0)
        .collect();
    let em = euler_maruyama_with_variates(
        100.0,
        |s, t| gbm.drift(s, t),
        |s, t| gbm.diffusion(s, t),
        t_horizon,
        n_steps,
        &variates,
    )
    .expect("valid arguments");
    let mil = milstein_with_variates(
        100.0,
        |s, t| gbm.drift(s, t),
        |s, t| gbm.diffusion(s, t),
        |s, t| gbm.diffusion_derivative(s, t),
        t_horizon,
        n_steps,
        &variates,
    )
    .expect("valid arguments");
    println!(
        "Terminal values: Euler-Maruyama {:.6}, Milstein {:.6}, correction {:.6}\n",
        em.last().unwrap(),
        mil.last().unwrap(),
        (mil.last().unwrap() - em.last().unwrap()).abs()
    );

    // --- Parallel ensemble ---
    println!("--- Parallel ensemble ---");
    let cfg = EnsembleConfig {
        paths: 10_000,
        seed: 12345,
    };
    let scheme = EulerMaruyama::new(|s, t| gbm.drift(s, t), |s, t| gbm.diffusion(s, t));

    let mut timer = Timer::new();
    timer.start();
    let paths = sample_paths(&cfg, 100.0, t_horizon, n_steps, &scheme).expect("valid arguments");
    let elapsed = timer.elapsed_ms();
    println!(
        "Simulated {} paths x {} steps in {:.1} ms ({:.0} paths/sec)\n",
        cfg.paths,
        n_steps,
        elapsed,
        cfg.paths as f64 / (elapsed / 1000.0)
    );

    // --- CSV output ---
    match output::write_path_to_csv("results/gbm_path.csv", dt, &gbm_path) {
        Ok(_) => println!("GBM path written to results/gbm_path.csv"),
        Err(e) => eprintln!("Error writing path data: {}", e),
    }
    match output::write_ensemble_to_csv("results/ensemble.csv", dt, &paths[..paths.len().min(100)])
    {
        Ok(_) => println!("First 100 ensemble paths written to results/ensemble.csv"),
        Err(e) => eprintln!("Error writing ensemble data: {}", e),
    }
}

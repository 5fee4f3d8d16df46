// src/output.rs
use std::fs::File;
use std::io::{self, Write};

/// Write one path as `step,time,value` rows.
pub fn write_path_to_csv(filename: &str, dt: f64, path: &[f64]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "step,time,value")?;
    for (i, value) in path.iter().enumerate() {
        writeln!(file, "{},{},{}", i, i as f64 * dt, value)?;
    }
    Ok(())
}

/// Write an ensemble as `path_id,step,time,value` rows.
pub fn write_ensemble_to_csv(filename: &str, dt: f64, paths: &[Vec<f64>]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "path_id,step,time,value")?;
    for (path_id, path) in paths.iter().enumerate() {
        for (i, value) in path.iter().enumerate() {
            writeln!(file, "{},{},{},{}", path_id, i, i as f64 * dt, value)?;
        }
    }
    Ok(())
}

//! Demonstrates enabling verbose logging for fastconv.
use fastconv::{convolve_fft, TransformPlanner};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let a = [2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    let b = [1.0, 0.0, 7.0];
    convolve_fft(&a, &b).unwrap();

    let mut planner = TransformPlanner::<f64>::new();
    planner.convolve(&a, &b).unwrap();
    planner.convolve(&b, &a).unwrap();
}

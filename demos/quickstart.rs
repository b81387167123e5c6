//! Smoke demo: feed the three reference tracker packets through the
//! library and print each summary line.
//!
//! Run with: `cargo run --example quickstart`

fn main() -> pacer::Result<()> {
    tracing_subscriber::fmt().with_env_filter("pacer=trace").init();

    let packets: [(&str, Vec<f64>); 3] = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, values) in packets {
        println!("{}", pacer::summarize(code, &values)?);
    }

    Ok(())
}

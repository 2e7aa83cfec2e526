//! Validates a small signup payload and prints the aggregated report.
//!
//! Run with `RUST_LOG=vkit_validator=trace` to see per-field events.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vkit_option::Optional;
use vkit_validator::prelude::*;

fn main() -> Result<(), RuntimeError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(fmt::layer())
        .init();

    let name = "Bar";
    let age = 33_i64;
    let nickname: Optional<String> = Optional::absent();
    let wallet = Optional::present(String::from("0xbanana"));

    let report = aggregate([
        validate_field("name", name, &[&max_length(2), &min_length(50)]),
        validate_field("age", &age, &[&max(2_i64), &min(1_i64)]),
        validate_optional_field("nickname", &nickname, &[&min_length(3)]),
        validate_optional_field("wallet", &wallet, &[&eth_address()]),
    ])?;

    if report.is_valid() {
        println!("payload is valid");
    } else {
        for (field, error) in report.iter() {
            println!("{field}: {} ({})", error.message, error.code);
        }
    }

    Ok(())
}

use koans_rs::RleEncoder;
use std::env;

/// Encodes each argument and decodes it back.
///
/// Usage: cargo run --example rle <text>...
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: rle <text>...");
        std::process::exit(1);
    }

    let encoder = RleEncoder::new();
    for text in &args {
        let encoded = encoder.encode(text);
        match encoder.decode(&encoded) {
            Ok(decoded) => {
                println!("{text:?} -> {encoded:?} -> {decoded:?}");
                if decoded != *text {
                    eprintln!("  {text:?} contains digits and does not round-trip");
                }
            }
            Err(err) => eprintln!("{text:?} -> {encoded:?} -> error: {err}"),
        }
    }
}

use koans_rs::ConnectedRegionPainter;
use std::env;

/// Flood fills the sample image and prints it before and after.
///
/// Usage: cargo run --example paint [x y color]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (x, y, color) = match args.as_slice() {
        [] => (0, 0, 1),
        [x, y, color] => match (x.parse::<isize>(), y.parse::<isize>(), color.parse::<i32>()) {
            (Ok(x), Ok(y), Ok(color)) => (x, y, color),
            _ => {
                eprintln!("x, y and color must be integers");
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: paint [x y color]");
            std::process::exit(1);
        }
    };

    let image = vec![
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 2, 1, 3, 1, 0],
        vec![0, 2, 2, 2, 3, 1, 0],
        vec![0, 1, 2, 1, 3, 1, 0],
        vec![0, 3, 3, 3, 3, 1, 0],
        vec![0, 1, 1, 1, 1, 3, 0],
    ];
    let mut painter = match ConnectedRegionPainter::new(image, 7, 6) {
        Ok(painter) => painter,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("{painter}");
    match painter.flood_fill(x, y, color) {
        Ok(filled) => println!("Repainted {filled} pixels:\n\n{painter}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

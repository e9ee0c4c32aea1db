//! Example: rolling dice with reproducible seeds.

use seedgen::*;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    println!("Rolling from seed {}", config.seed);

    let die = Gen::int_range(1, 6);
    let (rolls, next) = generate_n(3, &die, config.initial_seed());
    println!("Three rolls: {rolls:?}");

    let (before_six, _) = capped_generate_until(100, |&v| v != 6, &die, next);
    println!("Rolled {} times before the first 6", before_six.len());

    let loaded = Gen::frequency(
        vec![
            WeightedChoice::new(3.0, Gen::constant("a")),
            WeightedChoice::new(1.0, Gen::constant("b")),
        ],
        Gen::constant("z"),
    );
    let (letters, _) = generate_n(20, &loaded, next);
    println!("Weighted letters: {}", letters.concat());

    println!("Quick sample: {:?}", config.generate_n(&zip2(die, Gen::bool())));
}

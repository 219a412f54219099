//! Trains the three boolean gates and prints the learned truth tables.

use sporenet::{train_and, train_or, train_xor, Network, NetworkError};

fn main() -> Result<(), NetworkError> {
    let epochs = 5000;

    let mut and_net = train_and(epochs)?;
    let mut or_net = train_or(epochs)?;
    let mut xor_net = train_xor(epochs)?;

    print_table("AND", &mut and_net)?;
    print_table("OR", &mut or_net)?;
    print_table("XOR (often fails with 2 hidden units)", &mut xor_net)?;

    Ok(())
}

fn print_table(name: &str, network: &mut Network) -> Result<(), NetworkError> {
    println!("{name}:");
    for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let output = network.forward(&input)?;
        println!("  {:?} -> {:.4}", input, output[0]);
    }
    Ok(())
}

use std::process;

use anyhow::Context;

use rsa_exchange::logging::ConsoleLog;
use rsa_exchange::Party;

// Fixed demo primes. Alice keeps the classic 83/97 pair; Bob gets his own
// pair so the two keypairs are actually independent.
const ALICE_PRIMES: (u64, u64) = (83, 97);
const BOB_PRIMES: (u64, u64) = (101, 113);

fn run() -> anyhow::Result<()> {
    let mut alice = Party::new("Alice", ALICE_PRIMES.0, ALICE_PRIMES.1, Box::new(ConsoleLog))
        .context("constructing Alice")?;
    let mut bob = Party::new("Bob", BOB_PRIMES.0, BOB_PRIMES.1, Box::new(ConsoleLog))
        .context("constructing Bob")?;

    bob.send_to(10, &mut alice)?;
    alice.send_to(7, &mut bob)?;
    alice.send_to(5, &mut bob)?;

    println!("{}: {:?}", alice.name(), alice.messages());
    println!("{}: {:?}", bob.name(), bob.messages());

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error running exchange: {:#}", e);
        process::exit(1);
    }
}

//! Reads a password from stdin and prints its PHC hash for seeding `sales_persons`.
//!
//! ```text
//! echo -n 'Password123' | cargo run --bin hash-password
//! ```

use std::io::Read;

use anyhow::Context;
use auth::password::strength;
use auth::PasswordHasher;

fn main() -> Result<(), anyhow::Error> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read password from stdin")?;

    let password = input.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    for violation in strength::check(password) {
        eprintln!("warning: {}", violation);
    }

    let hash = PasswordHasher::new()
        .hash(password)
        .context("Failed to hash password")?;

    println!("{}", hash);

    Ok(())
}

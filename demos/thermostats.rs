// SPDX-License-Identifier: MPL-2.0

//! Thermostat listing example.
//!
//! Connects with an existing access token, or walks through the PIN
//! authorization when none is given, then prints every thermostat.
//!
//! # Usage
//!
//! ```bash
//! # With an access token
//! cargo run --example thermostats -- <client_id> <client_secret> <token>
//!
//! # Without a token: prints the consent URL and waits for the PIN on stdin
//! cargo run --example thermostats -- <client_id> <client_secret>
//! ```

use std::env;
use std::io::{self, BufRead, Write};

use nestor_lib::{Nest, Response};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <client_id> <client_secret> [token]", args[0]);
        std::process::exit(1);
    }

    let client_id = &args[1];
    let secret = &args[2];
    let token = args.get(3).map_or("", String::as_str);

    let nest = match Nest::connect(client_id.as_str(), token) {
        Ok(nest) => nest,
        Err(missing) => {
            println!("Open this URL and authorize the application:");
            println!("  {}", missing.authorize_url());
            print!("PIN: ");
            io::stdout().flush()?;

            let mut pin = String::new();
            io::stdin().lock().read_line(&mut pin)?;

            let mut nest = missing.into_client();
            nest.authorize(secret, pin.trim()).await?;
            println!("Access token: {}", nest.token());
            nest
        }
    };

    let mut response = Response::default();
    nest.all(&mut response).await?;

    if response.devices.is_empty() {
        println!("No devices found");
        return Ok(());
    }

    for (id, thermostat) in &response.devices.thermostats {
        println!(
            "{id}  {:<24} {:>5.1}°{} target {:>5.1}  humidity {:>3.0}%  mode {}  {}",
            thermostat.name_long,
            thermostat.ambient_temperature(),
            thermostat.temperature_scale,
            thermostat.target_temperature(),
            thermostat.humidity,
            thermostat.hvac_mode,
            if thermostat.is_online { "online" } else { "offline" }
        );
    }

    println!("{} smoke/CO alarm(s)", response.devices.alarms.len());

    Ok(())
}

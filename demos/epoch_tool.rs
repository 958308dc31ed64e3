use std::env;

use zoneshift::{format, from_unix, now, to_unix, Instant};

/// Usage: epoch_tool [TIMESTAMP | DATETIME] [ZONE]
///
/// A numeric argument is read as UNIX seconds and rendered as a datetime; a
/// datetime argument is reduced to UNIX seconds. Without arguments the
/// current moment is shown both ways.
fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let input = args.next();
    let zone = args.next().unwrap_or_else(|| "UTC".to_string());

    match input {
        Some(raw) => {
            if let Ok(timestamp) = raw.parse::<f64>() {
                let moment = from_unix(timestamp)?;
                println!("{timestamp} is {moment} UTC");
                println!("In {zone}: {}", format(moment, zone.as_str().into(), None)?);
            } else {
                let moment: Instant = raw.parse()?;
                println!("{moment} is {}", to_unix(moment));
            }
        }
        None => {
            let moment = now();
            println!("{moment} UTC is {}", to_unix(moment));
            println!("In {zone}: {}", format(moment, zone.as_str().into(), None)?);
        }
    }

    Ok(())
}

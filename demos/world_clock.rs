use zoneshift::{format, now, to_local};

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    // One universal reading, rendered in several zones
    let moment = now();
    println!("Universal time: {moment}");
    println!();

    let zones = [
        "UTC",
        "America/New_York",
        "America/Los_Angeles",
        "Europe/Oslo",
        "Asia/Kolkata",
        "Asia/Tokyo",
        "Australia/Sydney",
    ];
    for zone in zones {
        let rendered = format(moment, zone.into(), Some("%Y-%m-%d %H:%M:%S %Z (%:z)"))?;
        println!("{zone:<20} {rendered}");
    }

    let sydney = to_local(moment, "Australia/Sydney".into())?;
    println!();
    println!("Sydney, zone attached: {sydney}");

    Ok(())
}

/// Route DST disambiguation notices to stderr while the clock prints to
/// stdout.
fn setup_logging() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message));
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

use meetacross_core::catalog;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let zones = catalog::list_all();
    if json {
        println!("{}", serde_json::to_string_pretty(zones)?);
        return Ok(());
    }

    for tz in zones {
        println!("{:<20} {}", tz.zone_id, tz.display_label);
    }
    Ok(())
}

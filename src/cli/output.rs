use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputMode;
use crate::models::light::LightSnapshot;

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "HOST")]
    host: String,
    #[tabled(rename = "TYPE")]
    device_type: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "POWER")]
    power: String,
    #[tabled(rename = "BRIGHTNESS")]
    brightness: u8,
    #[tabled(rename = "DEVICE ID")]
    unique_id: String,
}

impl From<&LightSnapshot> for LightRow {
    fn from(snapshot: &LightSnapshot) -> Self {
        LightRow {
            name: snapshot.name.clone(),
            host: snapshot.host.clone(),
            device_type: snapshot.device_type.clone(),
            status: if snapshot.available {
                "online"
            } else {
                "offline"
            }
            .to_string(),
            power: if snapshot.is_on { "on" } else { "off" }.to_string(),
            brightness: snapshot.brightness,
            unique_id: snapshot.unique_id.clone(),
        }
    }
}

pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_json_line(value: &serde_json::Value) {
    println!("{}", serde_json::to_string(value).unwrap_or_default());
}

pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }
    let table = Table::new(data).with(Style::rounded()).to_string();
    println!("{}", table);
}

pub fn print_snapshots(snapshots: &[LightSnapshot], mode: &OutputMode) -> Result<(), crate::error::AppError> {
    match mode {
        OutputMode::Json => print_json(&serde_json::to_value(snapshots)?),
        OutputMode::Table => {
            let rows: Vec<LightRow> = snapshots.iter().map(LightRow::from).collect();
            print_table(&rows);
        }
    }
    Ok(())
}

pub fn print_error(err: &crate::error::AppError) {
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
    );
}

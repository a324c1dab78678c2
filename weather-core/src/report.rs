/// Render the three-line human-readable report.
pub fn format_report(
    city: &str,
    temperature: f64,
    temperature_label: &str,
    wind_speed: f64,
    wind_speed_label: &str,
) -> String {
    format!(
        "The weather in {city} is:\n\
         \tTemperature: {temperature:.1} {temperature_label};\n\
         \tWind: {wind_speed:.1} {wind_speed_label}"
    )
}

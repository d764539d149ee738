// Adapter: the JSON weather client used through the WeatherService interface.

use anyhow::Result;
use design_patterns::demo;
use design_patterns::structural::adapter::{display_weather, ExternalWeatherApi, WeatherApiAdapter};

fn main() -> Result<()> {
    let config = demo::init()?;
    println!("{}", demo::banner("Adapter Pattern", &config));

    let adapter = WeatherApiAdapter::new(ExternalWeatherApi);
    println!("{}", display_weather(&adapter, "London")?);
    Ok(())
}

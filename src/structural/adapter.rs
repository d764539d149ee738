// Adapter Pattern
// `ExternalWeatherApi` speaks raw JSON payloads; `WeatherApiAdapter` exposes
// it through the `WeatherService` interface the rest of the code expects.

use crate::error::{PatternError, Result};
use serde_json::{json, Value};

/// Target interface.
pub trait WeatherService {
    fn current_temperature(&self, city: &str) -> Result<f64>;
}

/// Third-party client with an incompatible interface.
#[derive(Debug, Default)]
pub struct ExternalWeatherApi;

/// Any client that produces a JSON weather payload can be adapted.
pub trait WeatherPayloadSource {
    fn fetch_weather_data(&self, location: &str) -> Value;
}

impl WeatherPayloadSource for ExternalWeatherApi {
    // Canned response standing in for a real HTTP call.
    fn fetch_weather_data(&self, location: &str) -> Value {
        json!({
            "location": location,
            "temp_celsius": 22.5,
            "humidity": 60,
        })
    }
}

pub struct WeatherApiAdapter<A = ExternalWeatherApi> {
    external_api: A,
}

impl<A: WeatherPayloadSource> WeatherApiAdapter<A> {
    pub fn new(external_api: A) -> Self {
        Self { external_api }
    }
}

impl<A: WeatherPayloadSource> WeatherService for WeatherApiAdapter<A> {
    fn current_temperature(&self, city: &str) -> Result<f64> {
        let data = self.external_api.fetch_weather_data(city);
        tracing::debug!(city, payload = %data, "adapter: translating weather payload");
        data.get("temp_celsius")
            .and_then(Value::as_f64)
            .ok_or_else(|| PatternError::missing_field(city, "temp_celsius"))
    }
}

pub fn display_weather(service: &dyn WeatherService, city: &str) -> Result<String> {
    let temp = service.current_temperature(city)?;
    Ok(format!("Current temperature in {}: {}°C", city, temp))
}

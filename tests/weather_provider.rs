//! Live weather provider against a mocked OpenWeatherMap.

use building_energy_monitor::clock::FixedClock;
use building_energy_monitor::config::WeatherConfig;
use building_energy_monitor::domain::WeatherCondition;
use building_energy_monitor::weather::{IrradianceTable, WeatherProvider};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer, api_key: Option<&str>) -> WeatherProvider {
    let cfg = WeatherConfig {
        api_key: api_key.map(str::to_string),
        base_url: server.uri(),
        http_timeout_seconds: 5,
        ..Default::default()
    };
    WeatherProvider::from_config(&cfg, IrradianceTable::default(), Arc::new(FixedClock::at_hour(10)))
        .expect("provider")
}

#[tokio::test]
async fn live_response_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "-6.9175"))
        .and(query_param("lon", "107.6191"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": {"temp": 24.4, "humidity": 88, "feels_like": 25.1, "pressure": 1012},
            "weather": [{"main": "Rain", "description": "hujan ringan", "icon": "10d"}],
            "name": "Bandung",
            "sys": {"country": "ID"},
            "dt": 1718424000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, Some("test-key"));
    assert!(provider.is_live());

    let obs = provider.get_weather("bandung").await;
    assert_eq!(obs.temperature_celsius, 24.0);
    assert_eq!(obs.humidity_percent, 88.0);
    assert_eq!(obs.condition, WeatherCondition::Rain);
    assert_eq!(obs.solar_irradiance_wm2, 150.0);
    assert_eq!(obs.location_name, "Bandung");
    assert_eq!(obs.observed_at.timestamp(), 1718424000);
}

#[tokio::test]
async fn unknown_location_queries_jakarta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "-6.2088"))
        .and(query_param("lon", "106.8456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": {"temp": 33.0, "humidity": 60},
            "weather": [{"main": "Clear"}],
            "name": "Jakarta"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let obs = provider_for(&server, Some("k")).get_weather("yogyakarta").await;
    assert_eq!(obs.location_name, "Jakarta");
    assert_eq!(obs.solar_irradiance_wm2, 800.0);
}

#[tokio::test]
async fn server_error_falls_back_to_simulated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let obs = provider_for(&server, Some("k")).get_weather("surabaya").await;
    assert_eq!(obs.location_name, "Surabaya");
    assert!(WeatherCondition::SIMULATED.contains(&obs.condition));
    assert!(obs.temperature_celsius >= 32.0 && obs.temperature_celsius < 36.0);
}

#[tokio::test]
async fn unauthorized_falls_back_to_simulated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"cod": 401, "message": "Invalid API key"})))
        .expect(1)
        .mount(&server)
        .await;

    let obs = provider_for(&server, Some("bad")).get_weather("medan").await;
    assert_eq!(obs.location_name, "Medan");
}

#[tokio::test]
async fn malformed_payload_falls_back_to_simulated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let obs = provider_for(&server, Some("k")).get_weather("jakarta").await;
    assert_eq!(obs.location_name, "Jakarta");
    assert!(WeatherCondition::SIMULATED.contains(&obs.condition));
}

#[tokio::test]
async fn no_credential_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = provider_for(&server, None);
    assert!(!provider.is_live());
    let obs = provider.get_weather("bandung").await;
    assert_eq!(obs.location_name, "Bandung");
}

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{
    api::{DirectionsLauncher, Geocoder},
    config::Config,
    entities::{Coordinate, Placemark},
    error::{geocode_error, invalid_input_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    place_id: Option<String>,
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
}

impl From<GeocodeResult> for Placemark {
    fn from(result: GeocodeResult) -> Self {
        Placemark {
            place_id: result.place_id,
            formatted_address: result.formatted_address,
            coordinate: Coordinate::new(result.geometry.location.lat, result.geometry.location.lng),
        }
    }
}

fn placemarks(data: Response<Vec<GeocodeResult>>) -> Result<Vec<Placemark>, Error> {
    match data.status.as_str() {
        "ZERO_RESULTS" => Ok(vec![]),
        "OK" => Ok(data
            .results
            .ok_or_else(|| geocode_error())?
            .into_iter()
            .map(Placemark::from)
            .collect()),
        _ => Err(geocode_error()),
    }
}

/// Reverse geocoding over the Google Geocoding API.
#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.geocode_timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: config.maps_api_base.clone(),
            api_key: config.maps_api_key.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Vec<Placemark>, Error> {
        let key = self.api_key.clone().ok_or_else(|| {
            tracing::warn!("GOOGLE_MAPS_API_KEY is not set");
            geocode_error()
        })?;

        let latlng: String = coordinate.into();
        let url = format!("https://{}/maps/api/geocode/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", key)])
            .query(&[("latlng", latlng)])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(?err, "geocode request failed");
                geocode_error()
            })?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            tracing::warn!(status_code, "geocode request rejected");
            return Err(geocode_error());
        }

        let data: Response<Vec<GeocodeResult>> = res.json().await.map_err(|err| {
            tracing::warn!(?err, "geocode response unreadable");
            geocode_error()
        })?;

        placemarks(data)
    }
}

/// Opens walking directions by building a Google Maps link and handing it to
/// `open`, which is whatever the platform uses to launch URLs.
pub struct MapsLink {
    open: Box<dyn Fn(&str, Url) + Send + Sync>,
}

impl MapsLink {
    pub fn new<F>(open: F) -> Self
    where
        F: Fn(&str, Url) + Send + Sync + 'static,
    {
        Self {
            open: Box::new(open),
        }
    }

    pub fn logging() -> Self {
        Self::new(|name, url| tracing::info!(%name, %url, "open walking directions"))
    }

    pub fn directions_url(destination: &Placemark) -> Result<Url, Error> {
        let coordinate: String = destination.coordinate.into();

        let mut params = vec![
            ("api", "1".to_string()),
            ("destination", coordinate),
            ("travelmode", "walking".to_string()),
        ];
        if let Some(place_id) = &destination.place_id {
            params.push(("destination_place_id", place_id.clone()));
        }

        Url::parse_with_params("https://www.google.com/maps/dir/", &params)
            .map_err(|_| invalid_input_error())
    }
}

impl DirectionsLauncher for MapsLink {
    fn open_walking_directions(&self, destination: &Placemark, name: &str) {
        match Self::directions_url(destination) {
            Ok(url) => (self.open)(name, url),
            Err(err) => tracing::warn!(?err, "could not build directions link"),
        }
    }
}

#[test]
fn ok_response_maps_to_placemarks() {
    let data: Response<Vec<GeocodeResult>> = serde_json::from_str(
        r#"{
            "status": "OK",
            "results": [
                {
                    "place_id": "ChIJAVkDPzdOqEcRcDteW0YgIQQ",
                    "formatted_address": "Pariser Platz, 10117 Berlin, Germany",
                    "geometry": { "location": { "lat": 52.5163, "lng": 13.3777 } }
                },
                {
                    "formatted_address": "Berlin, Germany",
                    "geometry": { "location": { "lat": 52.52, "lng": 13.405 } }
                }
            ]
        }"#,
    )
    .unwrap();

    let placemarks = placemarks(data).unwrap();

    assert_eq!(placemarks.len(), 2);
    assert_eq!(
        placemarks[0].place_id.as_deref(),
        Some("ChIJAVkDPzdOqEcRcDteW0YgIQQ")
    );
    assert_eq!(placemarks[0].coordinate, Coordinate::new(52.5163, 13.3777));
    assert!(placemarks[1].place_id.is_none());
}

#[test]
fn zero_results_is_empty_not_error() {
    let data: Response<Vec<GeocodeResult>> =
        serde_json::from_str(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap();

    assert!(placemarks(data).unwrap().is_empty());
}

#[test]
fn denied_request_is_geocode_error() {
    let data: Response<Vec<GeocodeResult>> =
        serde_json::from_str(r#"{ "status": "REQUEST_DENIED" }"#).unwrap();

    assert!(placemarks(data).unwrap_err().is_geocode());
}

#[test]
fn directions_url_requests_walking() {
    let placemark = Placemark {
        place_id: Some("abc".into()),
        formatted_address: "Somewhere".into(),
        coordinate: Coordinate::new(52.5, 13.4),
    };

    let url = MapsLink::directions_url(&placemark).unwrap();
    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("www.google.com"));
    assert!(query.contains(&("travelmode".into(), "walking".into())));
    assert!(query.contains(&("destination".into(), "52.5,13.4".into())));
    assert!(query.contains(&("destination_place_id".into(), "abc".into())));
}

#[test]
fn missing_api_key_fails_soft() {
    use tokio_test::block_on;

    let maps = GoogleMaps::new(&Config::default()).unwrap();
    let err = block_on(maps.reverse_geocode(Coordinate::new(0.0, 0.0))).unwrap_err();

    assert!(err.is_geocode());
}

#[tokio::test]
async fn unreachable_host_is_geocode_error() {
    let config = Config {
        maps_api_base: "127.0.0.1:1".into(),
        maps_api_key: Some("key".into()),
        ..Config::default()
    };
    let maps = GoogleMaps::new(&config).unwrap();

    let err = maps
        .reverse_geocode(Coordinate::new(52.5, 13.4))
        .await
        .unwrap_err();

    assert!(err.is_geocode());
}

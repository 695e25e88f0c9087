//! Routing API response types.
//!
//! These mirror the GraphQL selections in `queries.rs`. Fields the schema
//! marks nullable are `Option` here; conversion decides the fallbacks.

use serde::{Deserialize, Serialize};

/// GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// stopsByRadius
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsByRadiusData {
    #[serde(default)]
    pub stops_by_radius: Option<StopConnection>,
}

/// Relay-style connection of stops.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopConnection {
    #[serde(default)]
    pub edges: Option<Vec<StopEdge>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopEdge {
    #[serde(default)]
    pub node: Option<StopAtDistance>,
}

/// A stop and its distance from the query point.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StopAtDistance {
    /// Meters
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub stop: Option<StopRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopRef {
    #[serde(default)]
    pub gtfs_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl StopsByRadiusData {
    /// Flatten the connection into its nodes, skipping null edges.
    pub fn into_nodes(self) -> Vec<StopAtDistance> {
        self.stops_by_radius
            .and_then(|c| c.edges)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| e.node)
            .collect()
    }
}

// ============================================================================
// stop.stoptimesWithoutPatterns
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopDeparturesData {
    #[serde(default)]
    pub stop: Option<StopTimes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimes {
    #[serde(default)]
    pub stoptimes_without_patterns: Option<Vec<Option<StopTime>>>,
}

/// One scheduled call at a stop.
///
/// Departure fields are seconds since the start of `service_day`, which
/// is itself Unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTime {
    #[serde(default)]
    pub service_day: Option<i64>,
    #[serde(default)]
    pub scheduled_departure: Option<i64>,
    #[serde(default)]
    pub realtime_departure: Option<i64>,
    #[serde(default)]
    pub realtime: Option<bool>,
    #[serde(default)]
    pub headsign: Option<String>,
    #[serde(default)]
    pub trip: Option<Trip>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Trip {
    #[serde(default)]
    pub route: Option<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub short_name: Option<String>,
}

impl StopDeparturesData {
    /// The stop's departures, skipping null entries. An unknown stop yields
    /// an empty list.
    pub fn into_stop_times(self) -> Vec<StopTime> {
        self.stop
            .and_then(|s| s.stoptimes_without_patterns)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect()
    }
}

impl StopTime {
    /// Route short name, if the trip and route are present.
    pub fn line(&self) -> Option<&str> {
        self.trip
            .as_ref()
            .and_then(|t| t.route.as_ref())
            .and_then(|r| r.short_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stops_by_radius() {
        let json = r#"{
            "data": {
                "stopsByRadius": {
                    "edges": [
                        { "node": { "distance": 145, "stop": { "gtfsId": "HSL:2314601", "name": "Matinkylä (M)", "lat": 60.16, "lon": 24.73 } } },
                        { "node": null },
                        { "node": { "distance": 310.5, "stop": { "gtfsId": "HSL:2314209", "name": "Matinpuro" } } }
                    ]
                }
            }
        }"#;

        let response: GraphQlResponse<StopsByRadiusData> = serde_json::from_str(json).unwrap();
        assert!(response.errors.is_none());
        let nodes = response.data.unwrap().into_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].distance, Some(145.0));
        let stop = nodes[0].stop.as_ref().unwrap();
        assert_eq!(stop.gtfs_id.as_deref(), Some("HSL:2314601"));
        assert_eq!(stop.lat, Some(60.16));
        assert_eq!(nodes[1].stop.as_ref().unwrap().lon, None);
    }

    #[test]
    fn parse_null_connection() {
        let json = r#"{ "data": { "stopsByRadius": null } }"#;
        let response: GraphQlResponse<StopsByRadiusData> = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().into_nodes().is_empty());
    }

    #[test]
    fn parse_stop_departures() {
        let json = r#"{
            "data": {
                "stop": {
                    "stoptimesWithoutPatterns": [
                        {
                            "serviceDay": 1700000000,
                            "scheduledDeparture": 36000,
                            "realtimeDeparture": 36060,
                            "realtime": true,
                            "headsign": "Matinkylä",
                            "trip": { "route": { "shortName": "111" } }
                        },
                        null,
                        {
                            "serviceDay": 1700000000,
                            "scheduledDeparture": 36300,
                            "realtimeDeparture": null,
                            "realtime": false,
                            "headsign": null,
                            "trip": null
                        }
                    ]
                }
            }
        }"#;

        let response: GraphQlResponse<StopDeparturesData> = serde_json::from_str(json).unwrap();
        let times = response.data.unwrap().into_stop_times();
        assert_eq!(times.len(), 2);
        assert_eq!(times[0].line(), Some("111"));
        assert_eq!(times[0].realtime_departure, Some(36060));
        assert_eq!(times[1].line(), None);
        assert_eq!(times[1].headsign, None);
    }

    #[test]
    fn parse_unknown_stop() {
        let json = r#"{ "data": { "stop": null } }"#;
        let response: GraphQlResponse<StopDeparturesData> = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().into_stop_times().is_empty());
    }

    #[test]
    fn parse_errors_array() {
        let json = r#"{ "errors": [{ "message": "Validation error", "locations": [] }], "data": null }"#;
        let response: GraphQlResponse<StopDeparturesData> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors.unwrap()[0].message, "Validation error");
    }
}

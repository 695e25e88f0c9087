//! GraphQL documents sent to the routing API.

/// Stops around a point, with distance from it.
pub const STOPS_BY_RADIUS_QUERY: &str = r#"
query StopsByRadius($lat: Float!, $lon: Float!, $radius: Int!) {
  stopsByRadius(lat: $lat, lon: $lon, radius: $radius) {
    edges {
      node {
        distance
        stop { gtfsId name lat lon }
      }
    }
  }
}
"#;

/// Upcoming departures at one stop.
pub const STOP_DEPARTURES_QUERY: &str = r#"
query StopDeps($id: String!, $n: Int!) {
  stop(id: $id) {
    stoptimesWithoutPatterns(numberOfDepartures: $n) {
      serviceDay
      scheduledDeparture
      realtimeDeparture
      realtime
      headsign
      trip { route { shortName } }
    }
  }
}
"#;

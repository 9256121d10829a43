use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::forms::NewBarber;
use crate::models::{
    retain_valid, Barber, DayAvailability, Identified, Location, Offering, Order, User,
    ValidRecords,
};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// A CRUD collection exposed at `/<collection>[/:id]`
pub trait Resource: Identified + DeserializeOwned + Sized {
    /// Path segment, e.g. `barbers`
    const COLLECTION: &'static str;
    /// Singular noun used in prompts and messages
    const NOUN: &'static str;

    /// Decode one element of a listing. Elements that do not decode are
    /// skipped with a warning rather than failing the whole list.
    fn from_listing(value: Value) -> Option<Self> {
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping malformed {}: {}", Self::NOUN, e);
                None
            }
        }
    }
}

impl Resource for Location {
    const COLLECTION: &'static str = "locations";
    const NOUN: &'static str = "location";

    fn from_listing(value: Value) -> Option<Self> {
        let location = Location::from_value(&value);
        if location.is_none() {
            warn!("skipping location in unexpected format: {}", value);
        }
        location
    }
}

impl Resource for Offering {
    const COLLECTION: &'static str = "offerings";
    const NOUN: &'static str = "offering";
}

impl Resource for Barber {
    const COLLECTION: &'static str = "barbers";
    const NOUN: &'static str = "barber";
}

impl Resource for Order {
    const COLLECTION: &'static str = "orders";
    const NOUN: &'static str = "order";
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const NOUN: &'static str = "user";
}

/// What happened to a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation prompt; nothing was sent
    Cancelled,
}

/// Typed client for the barbershop REST API
#[derive(Debug, Clone, PartialEq)]
pub struct BarbershopClient<T> {
    transport: T,
}

impl<T: Transport> BarbershopClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request, turning non-2xx answers into [`ApiError::Status`]
    pub(crate) async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        debug!("{} {}", request.method, request.path);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response.status, &response.body))
        }
    }

    pub(crate) async fn execute_json<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
        serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// GET `primary`; on a 404 try `fallback` exactly once
    async fn get_with_fallback<R: DeserializeOwned>(
        &self,
        primary: HttpRequest,
        fallback: HttpRequest,
    ) -> ApiResult<R> {
        match self.execute_json(primary).await {
            Err(e) if e.is_not_found() => {
                warn!("not found, falling back to {}", fallback.path);
                self.execute_json(fallback).await
            }
            other => other,
        }
    }

    /// Fetch a collection and drop records without a valid id. Elements
    /// that do not decode count as dropped too.
    pub async fn list<R: Resource>(&self) -> ApiResult<ValidRecords<R>> {
        let path = format!("/{}", R::COLLECTION);
        let body: Value = self.execute_json(HttpRequest::new(Method::Get, path)).await?;
        let (items, malformed) = match body {
            Value::Array(items) => {
                let total = items.len();
                let decoded: Vec<R> = items.into_iter().filter_map(R::from_listing).collect();
                let malformed = total - decoded.len();
                (decoded, malformed)
            }
            other => {
                warn!("expected a list of {}, got {}", R::COLLECTION, other);
                (Vec::new(), 0)
            }
        };
        let mut valid = retain_valid(items);
        valid.dropped += malformed;
        Ok(valid)
    }

    pub async fn fetch<R: Resource>(&self, id: i64) -> ApiResult<R> {
        let path = format!("/{}/{}", R::COLLECTION, id);
        self.execute_json(HttpRequest::new(Method::Get, path)).await
    }

    pub async fn create<R: Resource, B: Serialize>(&self, payload: &B) -> ApiResult<R> {
        let request = HttpRequest::new(Method::Post, format!("/{}", R::COLLECTION))
            .with_body(Self::encode(payload)?);
        self.execute_json(request).await
    }

    pub async fn update<R: Resource, B: Serialize>(&self, id: i64, payload: &B) -> ApiResult<R> {
        let request = HttpRequest::new(Method::Put, format!("/{}/{}", R::COLLECTION, id))
            .with_body(Self::encode(payload)?);
        self.execute_json(request).await
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> ApiResult<()> {
        let path = format!("/{}/{}", R::COLLECTION, id);
        self.execute(HttpRequest::new(Method::Delete, path)).await?;
        Ok(())
    }

    /// Delete after asking `confirm`. An invalid id is rejected before the
    /// prompt; a declined prompt sends nothing.
    pub async fn delete_confirmed<R, F>(&self, id: Option<i64>, confirm: F) -> ApiResult<DeleteOutcome>
    where
        R: Resource,
        F: FnOnce(&str) -> bool,
    {
        let id = match id {
            Some(id) if id > 0 => id,
            _ => return Err(ApiError::InvalidInput(format!("Invalid {} id", R::NOUN))),
        };
        if !confirm(&format!("Are you sure you want to delete this {}?", R::NOUN)) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.delete::<R>(id).await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Barbers working at the location with this display name
    pub async fn barbers_by_location(&self, location_name: &str) -> ApiResult<Vec<Barber>> {
        let primary = HttpRequest::new(Method::Get, "/barbers/by-location")
            .with_query("locationName", location_name);
        let fallback =
            HttpRequest::new(Method::Get, "/by-location").with_query("locationName", location_name);
        self.get_with_fallback(primary, fallback).await
    }

    /// Resolve a location by id, then list its barbers by name.
    ///
    /// The backend filters barbers by location name, not id, so the name
    /// lookup has to succeed first.
    pub async fn barbers_at_location(&self, location_id: i64) -> ApiResult<(Location, Vec<Barber>)> {
        let location: Location = self.fetch(location_id).await?;
        if location.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("Location not found".to_string()));
        }
        let barbers = self.barbers_by_location(&location.name).await?;
        Ok((location, barbers))
    }

    pub async fn offerings_for_barber(&self, barber_id: i64) -> ApiResult<Vec<Offering>> {
        let primary = HttpRequest::new(Method::Get, format!("/offerings/barber/{}", barber_id));
        let fallback = HttpRequest::new(Method::Get, format!("/api/offerings/barber/{}", barber_id));
        self.get_with_fallback(primary, fallback).await
    }

    pub async fn availability(&self, barber_id: i64) -> ApiResult<Vec<DayAvailability>> {
        let path = format!("/barbers/{}/availability", barber_id);
        self.execute_json(HttpRequest::new(Method::Get, path)).await
    }

    pub async fn link_location(&self, barber_id: i64, location_id: i64) -> ApiResult<()> {
        let path = format!("/barbers/{}/locations/{}", barber_id, location_id);
        self.execute(HttpRequest::new(Method::Post, path)).await?;
        Ok(())
    }

    pub async fn link_offering(&self, barber_id: i64, offering_id: i64) -> ApiResult<()> {
        let path = format!("/barbers/{}/offerings/{}", barber_id, offering_id);
        self.execute(HttpRequest::new(Method::Post, path)).await?;
        Ok(())
    }

    /// Create the barber, then link its location and each offering.
    /// Stops at the first failed link; the barber itself is not rolled back.
    pub async fn create_barber(&self, new_barber: &NewBarber) -> ApiResult<Barber> {
        let created: Barber = self.create(&new_barber.payload).await?;
        let barber_id = created
            .barber_id
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::Decode("created barber has no id".to_string()))?;

        self.link_location(barber_id, new_barber.location_id).await?;
        for offering_id in &new_barber.offering_ids {
            self.link_offering(barber_id, *offering_id).await?;
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_filters_invalid_ids() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/users",
            200,
            json!([
                {"userId": 1, "username": "anna"},
                {"userId": 0, "username": "ghost"},
                {"username": "nobody"},
                {"userId": 3, "username": "boris"}
            ]),
        );
        let client = BarbershopClient::new(transport);

        let users = client.list::<User>().await.unwrap();
        assert_eq!(users.dropped, 2);
        let names: Vec<_> = users.records.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["anna", "boris"]);
    }

    #[tokio::test]
    async fn test_list_locations_normalizes_shapes() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/locations",
            200,
            json!([
                {"locationId": 1, "name": "Center", "address": "Main st. 1"},
                {"id": 2, "name": "North"},
                "Riverside",
                {"locationId": -1, "name": "Corrupt"},
                null
            ]),
        );
        let client = BarbershopClient::new(transport);

        let locations = client.list::<Location>().await.unwrap();
        let ids: Vec<_> = locations.records.iter().map(|l| l.location_id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        // "Riverside" and -1 lack a valid id; null does not decode at all
        assert_eq!(locations.dropped, 3);
    }

    #[tokio::test]
    async fn test_list_tolerates_non_array_body() {
        let transport = FakeTransport::new().respond(Method::Get, "/orders", 200, json!({"content": []}));
        let client = BarbershopClient::new(transport);

        let orders = client.list::<Order>().await.unwrap();
        assert!(orders.records.is_empty());
    }

    #[tokio::test]
    async fn test_error_body_message_surfaces() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/barbers/5",
            400,
            json!({"message": "ID must be greater than 0"}),
        );
        let client = BarbershopClient::new(transport);

        let err = client.fetch::<Barber>(5).await.unwrap_err();
        assert_eq!(err.to_string(), "ID must be greater than 0");
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        let client = BarbershopClient::new(FakeTransport::offline());
        let err = client.list::<Offering>().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_barbers_by_location_falls_back_once_on_404() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/barbers/by-location", 404, json!({"error": "Not Found"}))
            .respond(Method::Get, "/by-location", 200, json!([{"barberId": 2, "name": "Oleg"}]));
        let client = BarbershopClient::new(transport);

        let barbers = client.barbers_by_location("Center & Co").await.unwrap();
        assert_eq!(barbers.len(), 1);

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].path, "/by-location");
        assert_eq!(calls[1].query, vec![("locationName".to_string(), "Center & Co".to_string())]);
    }

    #[tokio::test]
    async fn test_no_fallback_for_other_errors() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/offerings/barber/4", 500, json!({"message": "boom"}))
            .respond(Method::Get, "/api/offerings/barber/4", 200, json!([]));
        let client = BarbershopClient::new(transport);

        let err = client.offerings_for_barber(4).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(client.transport().calls_to(Method::Get, "/api/offerings/barber/4").is_empty());
    }

    #[tokio::test]
    async fn test_offerings_fallback_path() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/api/offerings/barber/4",
            200,
            json!([{"offeringId": 1, "name": "Haircut", "price": 25.0, "duration": 30}]),
        );
        let client = BarbershopClient::new(transport);

        let offerings = client.offerings_for_barber(4).await.unwrap();
        assert_eq!(offerings[0].name, "Haircut");
    }

    #[tokio::test]
    async fn test_barbers_at_location_resolves_name_first() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/locations/3", 200, json!({"locationId": 3, "name": "Center"}))
            .respond(Method::Get, "/barbers/by-location", 200, json!([{"barberId": 1, "name": "Ivan"}]));
        let client = BarbershopClient::new(transport);

        let (location, barbers) = client.barbers_at_location(3).await.unwrap();
        assert_eq!(location.name, "Center");
        assert_eq!(barbers[0].name, "Ivan");
        let calls = client.transport().calls();
        assert_eq!(calls[0].path, "/locations/3");
        assert_eq!(calls[1].query[0].1, "Center");
    }

    #[tokio::test]
    async fn test_barbers_at_unknown_location_stops_before_barber_lookup() {
        let client = BarbershopClient::new(FakeTransport::new());

        let err = client.barbers_at_location(99).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(client.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_nameless_location_reports_plain_message() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/locations/3", 200, json!({"locationId": 3, "name": "  "}));
        let client = BarbershopClient::new(transport);

        let err = client.barbers_at_location(3).await.unwrap_err();
        assert_eq!(err.to_string(), "Location not found");
        assert_eq!(client.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_list_counts_undecodable_records_as_dropped() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/offerings",
            200,
            json!([
                {"offeringId": 1, "name": "Haircut", "price": 20.0, "duration": 30},
                {"offeringId": 2, "price": "free"},
                {"offeringId": 0, "name": "Ghost"}
            ]),
        );
        let client = BarbershopClient::new(transport);

        let offerings = client.list::<Offering>().await.unwrap();
        assert_eq!(offerings.records.len(), 1);
        assert_eq!(offerings.dropped, 2);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let client = BarbershopClient::new(FakeTransport::new());

        let outcome = client
            .delete_confirmed::<Barber, _>(Some(7), |prompt| {
                assert_eq!(prompt, "Are you sure you want to delete this barber?");
                false
            })
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_hits_endpoint() {
        let transport = FakeTransport::new().respond(Method::Delete, "/orders/7", 204, Value::Null);
        let client = BarbershopClient::new(transport);

        let outcome = client.delete_confirmed::<Order, _>(Some(7), |_| true).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(client.transport().calls_to(Method::Delete, "/orders/7").len(), 1);
    }

    #[tokio::test]
    async fn test_delete_with_invalid_id_skips_prompt() {
        let client = BarbershopClient::new(FakeTransport::new());
        let mut prompted = false;

        let err = client
            .delete_confirmed::<User, _>(Some(0), |_| {
                prompted = true;
                true
            })
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::InvalidInput("Invalid user id".to_string()));
        assert!(!prompted);
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_barber_links_location_and_offerings() {
        let transport = FakeTransport::new()
            .respond(Method::Post, "/barbers", 201, json!({"barberId": 12, "name": "Ivan"}))
            .respond(Method::Post, "/barbers/12/locations/3", 200, json!({"barberId": 12, "name": "Ivan"}))
            .respond(Method::Post, "/barbers/12/offerings/1", 200, json!({"barberId": 12, "name": "Ivan"}))
            .respond(Method::Post, "/barbers/12/offerings/2", 200, json!({"barberId": 12, "name": "Ivan"}));
        let client = BarbershopClient::new(transport);

        let form = crate::forms::BarberForm {
            name: "Ivan".to_string(),
            days: vec!["Mo".to_string()],
            location_id: "3".to_string(),
            offering_ids: vec![1, 2],
            ..Default::default()
        };
        let created = client.create_barber(&form.validate_new().unwrap()).await.unwrap();
        assert_eq!(created.barber_id, Some(12));

        let paths: Vec<_> = client.transport().calls().into_iter().map(|c| c.path).collect();
        assert_eq!(
            paths,
            vec!["/barbers", "/barbers/12/locations/3", "/barbers/12/offerings/1", "/barbers/12/offerings/2"]
        );
    }

    #[tokio::test]
    async fn test_create_sends_json_body() {
        let transport = FakeTransport::new().respond(
            Method::Post,
            "/locations",
            201,
            json!({"locationId": 10, "name": "South", "address": "Park 2"}),
        );
        let client = BarbershopClient::new(transport);

        let payload = crate::models::LocationPayload {
            name: "South".to_string(),
            address: "Park 2".to_string(),
        };
        let created: Location = client.create(&payload).await.unwrap();
        assert_eq!(created.location_id, Some(10));

        let call = &client.transport().calls()[0];
        let sent: Value = serde_json::from_str(call.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "South", "address": "Park 2"}));
    }
}

//! The last step of the booking wizard: picking a slot and placing the order.
//!
//! Earlier steps only carry an identifier forward in the route, so all the
//! state worth testing lives here.

use log::{info, warn};
use thiserror::Error;

use crate::client::BarbershopClient;
use crate::error::{ApiError, ApiResult};
use crate::format::compose_order_date;
use crate::models::{Barber, DayAvailability, Offering, Order, OrderPayload};
use crate::transport::{HttpRequest, Method, Transport};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Please choose a date and a time")]
    IncompleteSelection,

    #[error("No location selected. Please choose a location first")]
    MissingLocation,

    #[error("Please sign in to place an order")]
    NotLoggedIn,

    #[error("No available time for this barber")]
    NoAvailability,

    #[error("The selected slot is not a valid date and time")]
    InvalidSlot,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Date and time choice over a barber's availability
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlotPicker {
    days: Vec<DayAvailability>,
    selected_date: Option<String>,
    selected_time: Option<String>,
}

impl TimeSlotPicker {
    /// The first date is preselected. Fails when there is nothing to book.
    pub fn new(days: Vec<DayAvailability>) -> Result<Self, BookingError> {
        let selected_date = days.first().map(|day| day.date.clone());
        if selected_date.is_none() {
            return Err(BookingError::NoAvailability);
        }
        Ok(Self {
            days,
            selected_date,
            selected_time: None,
        })
    }

    pub fn days(&self) -> &[DayAvailability] {
        &self.days
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    /// Choose a date; always clears the chosen time. Unknown dates are ignored.
    pub fn select_date(&mut self, date: &str) {
        if self.days.iter().any(|day| day.date == date) {
            self.selected_date = Some(date.to_string());
            self.selected_time = None;
        }
    }

    /// Choose a time offered on the selected date
    pub fn select_time(&mut self, time: &str) {
        if self.times_for_selected_date().iter().any(|t| t == time) {
            self.selected_time = Some(time.to_string());
        }
    }

    pub fn times_for_selected_date(&self) -> &[String] {
        self.selected_date
            .as_deref()
            .and_then(|date| self.days.iter().find(|day| day.date == date))
            .map(|day| day.times.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_complete(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some()
    }

    /// The order's date-time, once both parts are chosen
    pub fn order_date(&self) -> Result<String, BookingError> {
        match (self.selected_date.as_deref(), self.selected_time.as_deref()) {
            (Some(date), Some(time)) => {
                compose_order_date(date, time).ok_or(BookingError::InvalidSlot)
            }
            _ => Err(BookingError::IncompleteSelection),
        }
    }
}

/// Identifiers collected along the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub barber_id: i64,
    pub offering_id: i64,
    /// From storage; set by the location step
    pub location_id: Option<i64>,
    /// From storage; set by signing in
    pub user_id: Option<i64>,
}

impl BookingRequest {
    /// Build the order body. The slot and location are checked before the
    /// user so an incomplete form never redirects to the profile screen.
    pub fn compose(&self, picker: &TimeSlotPicker) -> Result<OrderPayload, BookingError> {
        if !picker.is_complete() {
            return Err(BookingError::IncompleteSelection);
        }
        let location_id = self
            .location_id
            .filter(|id| *id > 0)
            .ok_or(BookingError::MissingLocation)?;
        let order_date = picker.order_date()?;
        let user_id = self
            .user_id
            .filter(|id| *id > 0)
            .ok_or(BookingError::NotLoggedIn)?;

        Ok(OrderPayload {
            order_date,
            barber_id: self.barber_id,
            offering_id: self.offering_id,
            location_id,
            user_id,
        })
    }
}

/// Everything the time step shows. The barber and offering only feed the
/// heading and are `None` when their lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStep {
    pub barber: Option<Barber>,
    pub offering: Option<Offering>,
    pub picker: TimeSlotPicker,
}

impl<T: Transport> BarbershopClient<T> {
    /// Load the time step. Only the availability lookup can fail it.
    pub async fn load_time_step(
        &self,
        barber_id: i64,
        offering_id: i64,
    ) -> Result<TimeStep, BookingError> {
        let barber = match self.fetch::<Barber>(barber_id).await {
            Ok(barber) => Some(barber),
            Err(e) => {
                warn!("no heading barber {}: {}", barber_id, e);
                None
            }
        };
        let offering = match self.fetch::<Offering>(offering_id).await {
            Ok(offering) => Some(offering),
            Err(e) => {
                warn!("no heading offering {}: {}", offering_id, e);
                None
            }
        };
        let picker = self.load_time_slots(barber_id).await?;
        Ok(TimeStep {
            barber,
            offering,
            picker,
        })
    }

    /// Load the barber's slots into a picker
    pub async fn load_time_slots(&self, barber_id: i64) -> Result<TimeSlotPicker, BookingError> {
        let days = self.availability(barber_id).await?;
        TimeSlotPicker::new(days)
    }

    pub async fn place_order(&self, payload: &OrderPayload) -> ApiResult<Order> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        info!(
            "placing order for barber {} at {}",
            payload.barber_id, payload.order_date
        );
        self.execute_json(HttpRequest::new(Method::Post, "/orders").with_body(body))
            .await
    }

    /// Validate the wizard's choices and send exactly one order
    pub async fn book(
        &self,
        request: &BookingRequest,
        picker: &TimeSlotPicker,
    ) -> Result<Order, BookingError> {
        let payload = request.compose(picker)?;
        Ok(self.place_order(&payload).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identified;
    use crate::testing::FakeTransport;
    use serde_json::{json, Value};

    fn availability() -> Vec<DayAvailability> {
        vec![
            DayAvailability {
                date: "2025-03-12".to_string(),
                times: vec!["10:00".to_string(), "10:30".to_string()],
            },
            DayAvailability {
                date: "2025-03-13".to_string(),
                times: vec!["14:00".to_string()],
            },
        ]
    }

    fn request() -> BookingRequest {
        BookingRequest {
            barber_id: 2,
            offering_id: 5,
            location_id: Some(1),
            user_id: Some(9),
        }
    }

    #[test]
    fn test_picker_preselects_first_date() {
        let picker = TimeSlotPicker::new(availability()).unwrap();
        assert_eq!(picker.selected_date(), Some("2025-03-12"));
        assert_eq!(picker.selected_time(), None);
        assert_eq!(picker.times_for_selected_date(), ["10:00", "10:30"]);
    }

    #[test]
    fn test_empty_availability_has_no_picker() {
        assert_eq!(TimeSlotPicker::new(Vec::new()), Err(BookingError::NoAvailability));
    }

    #[test]
    fn test_selecting_date_clears_time() {
        let mut picker = TimeSlotPicker::new(availability()).unwrap();
        picker.select_time("10:30");
        assert!(picker.is_complete());

        picker.select_date("2025-03-13");
        assert_eq!(picker.selected_time(), None);
        assert_eq!(picker.times_for_selected_date(), ["14:00"]);

        // Times not offered on the selected date are ignored
        picker.select_time("10:30");
        assert_eq!(picker.selected_time(), None);

        picker.select_date("2030-01-01");
        assert_eq!(picker.selected_date(), Some("2025-03-13"));
    }

    #[test]
    fn test_compose_checks_selection_then_location_then_user() {
        let mut picker = TimeSlotPicker::new(availability()).unwrap();
        let no_user = BookingRequest { user_id: None, location_id: None, ..request() };

        assert_eq!(no_user.compose(&picker), Err(BookingError::IncompleteSelection));

        picker.select_time("10:00");
        assert_eq!(no_user.compose(&picker), Err(BookingError::MissingLocation));

        let no_user = BookingRequest { location_id: Some(1), ..no_user };
        assert_eq!(no_user.compose(&picker), Err(BookingError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_full_booking_sends_exactly_one_order() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/barbers/2/availability", 200, serde_json::to_value(availability()).unwrap())
            .respond(
                Method::Post,
                "/orders",
                200,
                json!({"orderId": 40, "orderDate": "2025-03-13T14:00:00", "barberId": 2, "offeringId": 5, "locationId": 1, "userId": 9}),
            );
        let client = BarbershopClient::new(transport);

        let mut picker = client.load_time_slots(2).await.unwrap();
        picker.select_date("2025-03-13");
        picker.select_time("14:00");
        let order = client.book(&request(), &picker).await.unwrap();
        assert!(order.has_valid_id());

        let posts = client.transport().calls_to(Method::Post, "/orders");
        assert_eq!(posts.len(), 1);
        assert_eq!(client.transport().count(Method::Post), 1);
        let sent: Value = serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            sent,
            json!({"orderDate": "2025-03-13T14:00:00", "barberId": 2, "offeringId": 5, "locationId": 1, "userId": 9})
        );
    }

    #[tokio::test]
    async fn test_incomplete_selection_sends_nothing() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/barbers/2/availability",
            200,
            serde_json::to_value(availability()).unwrap(),
        );
        let client = BarbershopClient::new(transport);

        let picker = client.load_time_slots(2).await.unwrap();
        let err = client.book(&request(), &picker).await.unwrap_err();
        assert_eq!(err, BookingError::IncompleteSelection);
        assert_eq!(client.transport().count(Method::Post), 0);
    }

    #[tokio::test]
    async fn test_signed_out_user_sends_nothing() {
        let client = BarbershopClient::new(FakeTransport::new());
        let mut picker = TimeSlotPicker::new(availability()).unwrap();
        picker.select_time("10:00");

        let err = client
            .book(&BookingRequest { user_id: None, ..request() }, &picker)
            .await
            .unwrap_err();
        assert_eq!(err, BookingError::NotLoggedIn);
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_time_step_survives_failed_heading_lookups() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/barbers/2", 500, json!({"message": "boom"}))
            .respond(
                Method::Get,
                "/barbers/2/availability",
                200,
                serde_json::to_value(availability()).unwrap(),
            );
        let client = BarbershopClient::new(transport);

        let step = client.load_time_step(2, 5).await.unwrap();
        assert_eq!(step.barber, None);
        assert_eq!(step.offering, None);
        assert_eq!(step.picker.selected_date(), Some("2025-03-12"));
    }

    #[tokio::test]
    async fn test_time_step_fills_heading_when_available() {
        let transport = FakeTransport::new()
            .respond(Method::Get, "/barbers/2", 200, json!({"barberId": 2, "name": "Ivan"}))
            .respond(Method::Get, "/offerings/5", 200, json!({"offeringId": 5, "name": "Haircut"}))
            .respond(
                Method::Get,
                "/barbers/2/availability",
                200,
                serde_json::to_value(availability()).unwrap(),
            );
        let client = BarbershopClient::new(transport);

        let step = client.load_time_step(2, 5).await.unwrap();
        assert_eq!(step.barber.map(|b| b.name).as_deref(), Some("Ivan"));
        assert_eq!(step.offering.map(|o| o.name).as_deref(), Some("Haircut"));
    }

    #[tokio::test]
    async fn test_failed_availability_fetch_yields_no_picker() {
        let transport = FakeTransport::new().respond(
            Method::Get,
            "/barbers/2/availability",
            500,
            json!({"message": "Schedule unavailable"}),
        );
        let client = BarbershopClient::new(transport);

        let err = client.load_time_slots(2).await.unwrap_err();
        assert_eq!(err.to_string(), "Schedule unavailable");
    }

    #[tokio::test]
    async fn test_rejected_order_surfaces_backend_message() {
        let transport = FakeTransport::new().respond(
            Method::Post,
            "/orders",
            409,
            json!({"error": "Slot already taken"}),
        );
        let client = BarbershopClient::new(transport);
        let mut picker = TimeSlotPicker::new(availability()).unwrap();
        picker.select_time("10:30");

        let err = client.book(&request(), &picker).await.unwrap_err();
        assert_eq!(err.to_string(), "Slot already taken");
    }
}

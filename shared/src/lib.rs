//! Domain types, REST client and screen logic for the barbershop booking app.
//!
//! Everything here is independent of the browser: HTTP goes through the
//! [`Transport`] trait and persistence through [`SessionStore`], so the
//! frontend only supplies those two and renders.

pub mod account;
pub mod booking;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod route;
pub mod session;
pub mod summary;
pub mod transport;
pub mod weekday;

#[cfg(test)]
mod testing;

pub use account::Credentials;
pub use booking::{BookingError, BookingRequest, TimeSlotPicker, TimeStep};
pub use client::{BarbershopClient, DeleteOutcome, Resource};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ValidationError};
pub use forms::{BarberForm, LocationForm, NewBarber, OfferingForm, UserForm};
pub use models::{
    retain_valid, Barber, BarberPayload, DayAvailability, Identified, Location, LocationPayload,
    Offering, OfferingPayload, Order, OrderPayload, User, UserPayload, ValidRecords,
};
pub use route::Route;
pub use session::{Session, SessionStore, Theme};
pub use summary::OrderSummary;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use weekday::Weekday;

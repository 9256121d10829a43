//! Local form state for the admin screens and its conversion into the
//! payload shapes the backend accepts.

use crate::error::ValidationError;
use crate::format::{parse_time_of_day, to_wire_time, truncate_to_minutes};
use crate::models::{
    Barber, BarberPayload, Location, LocationPayload, Offering, OfferingPayload, User, UserPayload,
};
use crate::weekday::{labels_for_tokens, Weekday};

fn required(value: &str, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(message))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationForm {
    pub name: String,
    pub address: String,
}

impl LocationForm {
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            address: location.address.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<LocationPayload, ValidationError> {
        Ok(LocationPayload {
            name: required(&self.name, "Location name is required")?,
            address: required(&self.address, "Address is required")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfferingForm {
    pub name: String,
    pub price: String,
    pub duration: String,
}

impl OfferingForm {
    pub fn from_offering(offering: &Offering) -> Self {
        Self {
            name: offering.name.clone(),
            price: offering.price.to_string(),
            duration: offering.duration.to_string(),
        }
    }

    pub fn validate(&self) -> Result<OfferingPayload, ValidationError> {
        let name = required(&self.name, "Offering name is required")?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| ValidationError::new("Price must be a positive number"))?;
        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| ValidationError::new("Duration must be a positive number of minutes"))?;
        Ok(OfferingPayload { name, price, duration })
    }
}

/// Barber create/edit form. Days are held as display labels, times as `HH:MM`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarberForm {
    pub name: String,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    /// Raw value of the location select; empty until chosen
    pub location_id: String,
    pub offering_ids: Vec<i64>,
}

impl Default for BarberForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            days: Vec::new(),
            start_time: "08:00".to_string(),
            end_time: "18:00".to_string(),
            location_id: String::new(),
            offering_ids: Vec::new(),
        }
    }
}

/// A validated new barber plus the links to create after it
#[derive(Debug, Clone, PartialEq)]
pub struct NewBarber {
    pub payload: BarberPayload,
    pub location_id: i64,
    pub offering_ids: Vec<i64>,
}

impl BarberForm {
    /// Open the edit form for an existing barber
    pub fn from_barber(barber: &Barber) -> Self {
        Self {
            name: barber.name.clone(),
            days: labels_for_tokens(&barber.available_days),
            start_time: truncate_to_minutes(&barber.start_time),
            end_time: truncate_to_minutes(&barber.end_time),
            location_id: String::new(),
            offering_ids: barber.offerings.iter().filter_map(|o| o.offering_id).collect(),
        }
    }

    /// Stored day tokens that are not weekdays, kept verbatim
    pub fn unknown_days(&self) -> Vec<&str> {
        self.days
            .iter()
            .filter(|label| Weekday::from_label(label).is_none())
            .map(String::as_str)
            .collect()
    }

    pub fn has_day(&self, label: &str) -> bool {
        self.days.iter().any(|d| d == label)
    }

    pub fn toggle_day(&mut self, label: &str) {
        if self.has_day(label) {
            self.days.retain(|d| d != label);
        } else {
            self.days.push(label.to_string());
        }
    }

    pub fn has_offering(&self, offering_id: i64) -> bool {
        self.offering_ids.contains(&offering_id)
    }

    pub fn toggle_offering(&mut self, offering_id: i64) {
        if self.has_offering(offering_id) {
            self.offering_ids.retain(|id| *id != offering_id);
        } else {
            self.offering_ids.push(offering_id);
        }
    }

    /// Shared checks for create and update
    fn payload(&self, barber_id: Option<i64>) -> Result<BarberPayload, ValidationError> {
        let name = required(&self.name, "Barber name is required")?;
        if !self.days.iter().any(|label| Weekday::from_label(label).is_some()) {
            return Err(ValidationError::new("Select at least one day"));
        }
        // Tokens the backend sent that are not weekdays go back unchanged
        let available_days = self
            .days
            .iter()
            .map(|label| match Weekday::from_label(label) {
                Some(day) => day.token().to_string(),
                None => label.clone(),
            })
            .collect();

        let start = parse_time_of_day(&self.start_time);
        let end = parse_time_of_day(&self.end_time);
        match (start, end) {
            (Some(start), Some(end)) if start < end => {}
            (Some(_), Some(_)) => {
                return Err(ValidationError::new("Start time must be before end time"))
            }
            _ => return Err(ValidationError::new("Select valid working hours")),
        }

        Ok(BarberPayload {
            barber_id,
            name,
            available_days,
            start_time: to_wire_time(&self.start_time),
            end_time: to_wire_time(&self.end_time),
        })
    }

    pub fn validate_new(&self) -> Result<NewBarber, ValidationError> {
        let payload = self.payload(None)?;
        let location_id = self
            .location_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ValidationError::new("Select a valid location"))?;
        if self.offering_ids.is_empty() {
            return Err(ValidationError::new("Select at least one offering"));
        }
        Ok(NewBarber {
            payload,
            location_id,
            offering_ids: self.offering_ids.clone(),
        })
    }

    pub fn validate_update(&self, barber_id: i64) -> Result<BarberPayload, ValidationError> {
        self.payload(Some(barber_id))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserForm {
    pub username: String,
    /// Left empty to keep the current password
    pub password: String,
}

impl UserForm {
    /// The stored password is never copied into the form
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: String::new(),
        }
    }

    pub fn validate(&self) -> Result<UserPayload, ValidationError> {
        let username = required(&self.username, "Username is required")?;
        let password = Some(self.password.clone()).filter(|p| !p.is_empty());
        Ok(UserPayload { username, password })
    }
}

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Records carrying a backend-assigned primary key.
///
/// The backend is the only source of truth for identifiers; a record whose
/// key is missing or not positive is treated as corrupt and never rendered.
pub trait Identified {
    fn id(&self) -> Option<i64>;

    fn has_valid_id(&self) -> bool {
        matches!(self.id(), Some(id) if id > 0)
    }
}

/// A collection after corrupt records were filtered out
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecords<T> {
    pub records: Vec<T>,
    /// How many records were dropped for a missing or non-positive id, or
    /// because they did not decode
    pub dropped: usize,
}

impl<T> Default for ValidRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            dropped: 0,
        }
    }
}

/// Keep only records with a positive identifier
pub fn retain_valid<T: Identified>(items: Vec<T>) -> ValidRecords<T> {
    let total = items.len();
    let records: Vec<T> = items.into_iter().filter(Identified::has_valid_id).collect();
    let dropped = total - records.len();
    if dropped > 0 {
        warn!("dropped {} of {} records with an invalid id", dropped, total);
    }
    ValidRecords { records, dropped }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read an identifier that may arrive as a number or a numeric string
pub(crate) fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(alias = "id")]
    pub location_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Names of barbers working here, when the backend includes them
    #[serde(default)]
    pub barbers: Vec<String>,
}

impl Location {
    /// Normalize one entry of a location listing.
    ///
    /// Listings have been observed as bare strings as well as objects keyed
    /// by either `locationId` or `id`. Anything else yields `None`.
    pub fn from_value(value: &Value) -> Option<Location> {
        match value {
            Value::String(name) => Some(Location {
                location_id: name.trim().parse().ok(),
                name: name.clone(),
                address: None,
                barbers: Vec::new(),
            }),
            Value::Object(map) => {
                let location_id = map
                    .get("locationId")
                    .or_else(|| map.get("id"))
                    .and_then(id_from_value);
                let name = map.get("name").and_then(Value::as_str)?.to_string();
                let address = map
                    .get("address")
                    .and_then(Value::as_str)
                    .filter(|a| !a.trim().is_empty())
                    .map(str::to_string);
                let barbers = map
                    .get("barbers")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Some(Location {
                    location_id,
                    name,
                    address,
                    barbers,
                })
            }
            _ => None,
        }
    }

    pub fn display_address(&self) -> &str {
        self.address.as_deref().unwrap_or("Address not specified")
    }
}

impl Identified for Location {
    fn id(&self) -> Option<i64> {
        self.location_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub offering_id: Option<i64>,
    pub name: String,
    /// Price in the shop's currency unit
    #[serde(default)]
    pub price: f64,
    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,
}

impl Identified for Offering {
    fn id(&self) -> Option<i64> {
        self.offering_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub barber_id: Option<i64>,
    pub name: String,
    /// Raw weekday tokens; unknown tokens are kept so they can be shown
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_days: Vec<String>,
    /// Work-day start, `HH:MM:SS`
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    /// Work-day end, `HH:MM:SS`
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offerings: Vec<Offering>,
}

impl Barber {
    pub fn offering_names(&self) -> Vec<&str> {
        self.offerings.iter().map(|o| o.name.as_str()).collect()
    }
}

impl Identified for Barber {
    fn id(&self) -> Option<i64> {
        self.barber_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Option<i64>,
    /// Local date-time, `YYYY-MM-DDTHH:MM:SS`
    #[serde(default, alias = "startTime")]
    pub order_date: Option<String>,
    #[serde(default)]
    pub barber_id: Option<i64>,
    #[serde(default)]
    pub offering_id: Option<i64>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Identified for Order {
    fn id(&self) -> Option<i64> {
        self.order_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<i64>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// Copy of the user safe to keep in browser storage
    pub fn without_password(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }
}

impl Identified for User {
    fn id(&self) -> Option<i64> {
        self.user_id
    }
}

/// Bookable slots for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Time-of-day strings in display order
    #[serde(default)]
    pub times: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPayload {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingPayload {
    pub name: String,
    pub price: f64,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barber_id: Option<i64>,
    pub name: String,
    pub available_days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub order_date: String,
    pub barber_id: i64,
    pub offering_id: i64,
    pub location_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

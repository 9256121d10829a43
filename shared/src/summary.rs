use crate::format::format_order_date;
use crate::models::{Barber, Location, Offering, Order};

/// An order with its references resolved to display names
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: Option<i64>,
    pub barber_name: String,
    pub offering_name: String,
    pub location_name: String,
    pub when: String,
}

fn name_of<'a, T>(
    items: &'a [T],
    wanted: Option<i64>,
    id: impl Fn(&T) -> Option<i64>,
    name: impl Fn(&'a T) -> &'a str,
) -> Option<&'a str> {
    let wanted = wanted?;
    items.iter().find(|item| id(item) == Some(wanted)).map(name)
}

impl OrderSummary {
    /// Linear lookups; collections are small and unindexed
    pub fn resolve(
        order: &Order,
        barbers: &[Barber],
        offerings: &[Offering],
        locations: &[Location],
    ) -> Self {
        Self {
            order_id: order.order_id,
            barber_name: name_of(barbers, order.barber_id, |b| b.barber_id, |b| b.name.as_str())
                .unwrap_or("Unknown barber")
                .to_string(),
            offering_name: name_of(offerings, order.offering_id, |o| o.offering_id, |o| o.name.as_str())
                .unwrap_or("Unknown offering")
                .to_string(),
            location_name: name_of(locations, order.location_id, |l| l.location_id, |l| l.name.as_str())
                .unwrap_or("Unknown location")
                .to_string(),
            when: format_order_date(order.order_date.as_deref()),
        }
    }
}

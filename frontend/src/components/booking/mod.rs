pub mod barber_selection;
pub mod location_selection;
pub mod offering_selection;
pub mod time_selection;

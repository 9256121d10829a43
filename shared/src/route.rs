use std::fmt;

/// Screens reachable by path. Booking steps carry the previous step's
/// choice as a path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    BookLocation,
    BookBarber { location_id: i64 },
    BookOffering { barber_id: i64 },
    BookTime { barber_id: i64, offering_id: i64 },
    Barbers,
    Offerings,
    Orders,
    Users,
    Locations,
    Profile,
    NotFound,
}

impl Route {
    /// Parse a path such as `/book/time/2/5`. A leading `#` and trailing
    /// slashes are tolerated; unknown paths and bad ids give `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let id = |raw: &str| raw.parse::<i64>().ok().filter(|id| *id > 0);

        match segments.as_slice() {
            [] => Route::Home,
            ["book", "location"] => Route::BookLocation,
            ["book", "barber", location_id] => id(location_id)
                .map(|location_id| Route::BookBarber { location_id })
                .unwrap_or(Route::NotFound),
            ["book", "offering", barber_id] => id(barber_id)
                .map(|barber_id| Route::BookOffering { barber_id })
                .unwrap_or(Route::NotFound),
            ["book", "time", barber_id, offering_id] => match (id(barber_id), id(offering_id)) {
                (Some(barber_id), Some(offering_id)) => Route::BookTime {
                    barber_id,
                    offering_id,
                },
                _ => Route::NotFound,
            },
            ["barbers"] => Route::Barbers,
            ["offerings"] => Route::Offerings,
            ["orders"] => Route::Orders,
            ["users"] => Route::Users,
            ["locations"] => Route::Locations,
            ["profile"] => Route::Profile,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::BookLocation => "/book/location".to_string(),
            Route::BookBarber { location_id } => format!("/book/barber/{}", location_id),
            Route::BookOffering { barber_id } => format!("/book/offering/{}", barber_id),
            Route::BookTime {
                barber_id,
                offering_id,
            } => format!("/book/time/{}/{}", barber_id, offering_id),
            Route::Barbers => "/barbers".to_string(),
            Route::Offerings => "/offerings".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::Users => "/users".to_string(),
            Route::Locations => "/locations".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_booking_steps() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("#/book/location"), Route::BookLocation);
        assert_eq!(Route::parse("/book/barber/3"), Route::BookBarber { location_id: 3 });
        assert_eq!(Route::parse("/book/offering/7/"), Route::BookOffering { barber_id: 7 });
        assert_eq!(
            Route::parse("/book/time/7/12"),
            Route::BookTime { barber_id: 7, offering_id: 12 }
        );
    }

    #[test]
    fn test_bad_ids_and_unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/book/barber/abc"), Route::NotFound);
        assert_eq!(Route::parse("/book/barber/0"), Route::NotFound);
        assert_eq!(Route::parse("/book/time/7"), Route::NotFound);
        assert_eq!(Route::parse("/admin"), Route::NotFound);
    }

    #[test]
    fn test_path_parses_back_to_same_route() {
        for route in [
            Route::Home,
            Route::BookTime { barber_id: 1, offering_id: 2 },
            Route::Orders,
            Route::Profile,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}

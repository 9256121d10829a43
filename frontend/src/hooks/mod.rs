pub mod use_collection;
pub mod use_route;
pub mod use_session;
pub mod use_theme;

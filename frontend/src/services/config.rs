use shared::ClientConfig;

/// Settings baked in at build time through `BARBERSHOP_API_URL` and
/// `BARBERSHOP_LOG_LEVEL`
pub fn client_config() -> ClientConfig {
    ClientConfig::from_overrides(
        option_env!("BARBERSHOP_API_URL"),
        option_env!("BARBERSHOP_LOG_LEVEL"),
    )
}

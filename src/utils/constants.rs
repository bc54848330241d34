/// Tick rate for the sale countdown.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Identifier of the injected-provider connector on the connect screen.
pub const INJECTED_CONNECTOR_ID: &str = "injected";

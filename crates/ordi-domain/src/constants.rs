//! Domain constants

/// First sequence number handed out for an abstraction
pub const FIRST_SEQUENCE: u64 = 0;

/// Implementation name recorded for factory registrations
pub const FACTORY_IMPLEMENTATION_NAME: &str = "<factory>";

/// Implementation name recorded for pre-built instance registrations
pub const INSTANCE_IMPLEMENTATION_NAME: &str = "<instance>";

use tracing::warn;

// Wire versions negotiated with the server, keyed to the release that
// introduced them. The mapping is fixed by the protocol.
pub const THREE_DOT_ZERO_WIRE_VERSION: i32 = 3;
pub const THREE_DOT_TWO_WIRE_VERSION: i32 = 4;
pub const THREE_DOT_FOUR_WIRE_VERSION: i32 = 5;
pub const THREE_DOT_SIX_WIRE_VERSION: i32 = 6;
pub const FOUR_DOT_ZERO_WIRE_VERSION: i32 = 7;
pub const FOUR_DOT_TWO_WIRE_VERSION: i32 = 8;
pub const FOUR_DOT_FOUR_WIRE_VERSION: i32 = 9;

/// What this layer needs to know about a connected server.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionDescription {
    max_wire_version: i32,
}

impl ConnectionDescription {
    pub fn new(max_wire_version: i32) -> ConnectionDescription {
        ConnectionDescription { max_wire_version }
    }

    pub fn max_wire_version(&self) -> i32 {
        self.max_wire_version
    }
}

pub fn server_is_at_least(
    description: &ConnectionDescription,
    expected_wire_version: i32,
) -> bool {
    !server_is_less_than(description, expected_wire_version)
}

/// True when the server does not meet the expected minimum. Emits an
/// advisory diagnostic with both versions resolved to release labels; the
/// caller decides whether to abort, degrade, or proceed.
pub fn server_is_less_than(
    description: &ConnectionDescription,
    expected_wire_version: i32,
) -> bool {
    let incompatible = description.max_wire_version() < expected_wire_version;
    if incompatible {
        warn!(
            "server version is not at least {} (wire version {}), but {} (wire version {})",
            wire_version_label(expected_wire_version),
            expected_wire_version,
            wire_version_label(description.max_wire_version()),
            description.max_wire_version(),
        );
    }
    incompatible
}

pub fn wire_version_label(wire_version: i32) -> &'static str {
    match wire_version {
        THREE_DOT_ZERO_WIRE_VERSION => "3.0",
        THREE_DOT_TWO_WIRE_VERSION => "3.2",
        THREE_DOT_FOUR_WIRE_VERSION => "3.4",
        THREE_DOT_SIX_WIRE_VERSION => "3.6",
        FOUR_DOT_ZERO_WIRE_VERSION => "4.0",
        FOUR_DOT_TWO_WIRE_VERSION => "4.2",
        FOUR_DOT_FOUR_WIRE_VERSION => "4.4",
        _ => "unknown",
    }
}

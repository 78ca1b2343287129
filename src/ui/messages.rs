// User-facing message table

pub const TITLE: &str = "Network details";
pub const SUCCESS: &str = "Network information retrieved";
pub const NO_WIFI: &str = "No Wi-Fi connection found";
pub const NO_PASSWORD: &str = "could not be retrieved";
pub const PERMISSION_ERROR: &str = "Administrator privileges may be required";
pub const UNSUPPORTED: &str = "This operating system is not supported";
pub const INTERRUPTED: &str = "Interrupted by user";

pub const CONNECTED_LABEL: &str = "Connected Wi-Fi:";
pub const PASSWORD_LABEL: &str = "Wi-Fi password:";

/// Width of the `=` rules around the report
pub const RULE_WIDTH: usize = 50;

//! Global constants for the colours application

/// Endpoint serving `{ "colours": [...] }`
pub const DEFAULT_ENDPOINT: &str = "/api/get_colours";

/// Id of the container element the swatches are mounted into
pub const DEFAULT_CONTAINER_ID: &str = "colours-list";

/// Heading shown above the list
pub const DEFAULT_TITLE: &str = "Colours app";

/// CSS class of the view's root element
pub const APP_CLASS: &str = "app";

/// CSS class of each swatch element
pub const SWATCH_CLASS: &str = "colour-box";

/// Origin assumed for path-only endpoints outside the browser
pub const NATIVE_BASE_URL: &str = "http://localhost:8080";

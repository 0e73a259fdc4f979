// src/config/consts.rs

// Net config
pub const RELAY_PREFIX: &str = "https://corsproxy.io/?";
pub const WEBSERVICE_URL: &str = "https://csdb.dk/webservice/";
pub const RELEASE_URL: &str = "https://csdb.dk/release/";
pub const USER_AGENT: &str = "csdb_toplist/0.2";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Chart feed
pub const CHART_TYPE: &str = "chart";
pub const CHART_CTYPE: &str = "release";
pub const CHART_SUBTYPE: u32 = 1; // C64 demos
pub const PAGE_SIZE: usize = 25;
pub const MAX_PAGES: u32 = 20; // hard cap, avoids runaway pagination

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "toplist";

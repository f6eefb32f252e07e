// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://postalpro.usps.com";
pub const PAGE_PATH: &str = "/ZIP_Locale_Detail";
pub const XLS_LINK_SUFFIX: &str = "ZIP_Locale_Detail.xls";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local store (debug log + HTTP response cache)
pub const STORE_DIR: &str = ".store";
pub const HTTP_CACHE_SUBDIR: &str = "http";
pub const HTTP_CACHE_TTL_SECS: u64 = 6 * 60 * 60;

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const ALL_RECORDS_FILE: &str = "zip_locale_detail.json";
pub const STATES_SUBDIR: &str = "states";
pub const MARKER_FILE: &str = "last_updated.txt";
pub const UNKNOWN_STATE: &str = "UNKNOWN";

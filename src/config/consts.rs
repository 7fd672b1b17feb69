// src/config/consts.rs

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const USER_KEY: &str = "collegefinder_user";
pub const COLLEGES_KEY: &str = "collegefinder_colleges";

// Settings file (key=value), looked up in the working directory
pub const CONFIG_FILE: &str = "collegefinder.conf";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_FILE: &str = "users.csv";

// Rendering
pub const INITIAL_CARDS: usize = 50;
pub const SHOW_ALL_CARDS: usize = 200;
pub const UPLOAD_CARDS: usize = 200;
pub const MAX_COURSE_TOKENS: usize = 6;

// Hand-off variant
pub const MOBILE_MIN_DIGITS: usize = 10;
pub const MOBILE_MAX_DIGITS: usize = 15;

// src/config/consts.rs

// Net config
pub const WIKI_BASE: &str = "https://fallout-archive.fandom.com/wiki";
pub const PAGE_SUFFIX: &str = "%27s_dialogue";
pub const USER_AGENT: &str = concat!("wiki_dialogue/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const DEFAULT_CHARACTER: &str = "Cait";
pub const OUT_SUFFIX: &str = "_dialogue.csv";
pub const HEADER_SKIP: usize = 2; // page chrome <th> cells before the dialogue table's
pub const ANCHOR_CHILD: usize = 3; // every dialogue row has at least this many <td>

// Local storage
pub const STORE_DIR: &str = "storage";
pub const STORE_SEP: char = ',';
pub const STORE_EXT: &str = "csv";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "wiki_dialogue.toml";

// Analyze
pub const RESPONSE_COLUMN: &str = "RESPONSE TEXT";
pub const NOTES_COLUMN: &str = "SCRIPT NOTES";
pub const NOTES_SEP: char = '/';
pub const TOP_N: usize = 10;

// Serve
pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 8050;
pub const DEFAULT_FILE: &str = "cait.csv";
pub const BROWSER_DELAY_MS: u64 = 1_000;
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

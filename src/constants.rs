//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the optional JSON document supplying the demo list.
pub const ITEMS_FILE_NAME: &str = "demo_items.json";

/// Number of placeholder items generated when the items file is
/// missing or unusable.
pub const FALLBACK_ITEM_COUNT: i64 = 20;

/// Amount the progress bar moves per advance/regress click.
pub const PROGRESS_STEP: f32 = 0.1;

/// Choices offered by the favorite-fruit picker.
pub const FRUITS: [&str; 4] = ["Apple", "Banana", "Cherry", "Grape"];

pub mod json;
pub mod tabular;

pub use json::{JsonConfig, JsonFormatter, convert_to_json};
pub use tabular::{header_row, write_csv};

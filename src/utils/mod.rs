pub mod environment;
pub mod paths;
pub mod progress;

pub use environment::resolve_data_dir;
pub use paths::{
    encode_name, format_path_with_tilde, resolve_in_project, safe_open_file,
    validate_file_size,
};
pub use progress::with_spinner;

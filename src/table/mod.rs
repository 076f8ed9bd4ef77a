mod export;
mod page;

pub use export::{export_csv, export_file_name};
pub use page::{DEFAULT_ROWS_PER_PAGE, Pagination};

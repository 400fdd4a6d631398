pub mod format;
pub mod page;
pub mod sort;
pub mod source;
pub mod table;
pub mod validator;

pub use page::{filler_rows, page_count, paginate, PAGE_SIZES};
pub use sort::{stable_sort, SortDirection, SortKey};
pub use source::{sample_validators, StaticSource, ValidatorSource};
pub use table::{TableState, ValidatorRow};
pub use validator::{Validator, ValidatorId};

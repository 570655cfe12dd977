pub mod codec;
pub mod keys;
pub mod types;

pub use codec::{decode, decode_page, reset, serialize, set_field, with_page};
pub use keys::{FieldKind, FilterKey, UnknownKey, ALLOWED_QUERY_KEYS, PAGE_KEY, SIZE_KEY};
pub use types::{FilterState, InvalidValue, PageQuery, SortBy, SortDirection};

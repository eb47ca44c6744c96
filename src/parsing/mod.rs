pub mod detail;
pub mod numeric;

pub use detail::parse_detail;
pub use numeric::extract_numeric;

//! Market data aggregate: price points, the range mapper and the indicator.

pub mod entities;
pub mod indicator;
pub mod repositories;
pub mod time_range;
pub mod value_objects;

pub use entities::*;
pub use indicator::*;
pub use repositories::PriceHistoryRepository;
pub use time_range::*;
pub use value_objects::*;

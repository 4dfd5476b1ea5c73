pub mod datatypes;
pub mod editable;
pub mod bouquet_item;
pub mod marker_spec;
pub mod utils;

// 重新导出主要结构
pub use bouquet_item::{BouquetItem, BouquetItemMarker};
pub use datatypes::{BouquetItemType, ServiceRefFlags};
pub use editable::{EditSession, EditState, Editable, PropertyChangedHandlers, SubscriptionId};
pub use marker_spec::{build_markers, MarkerSpec};
pub use utils::BouquetError;

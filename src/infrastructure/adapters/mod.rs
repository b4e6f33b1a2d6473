//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod serializers;
pub mod storage;
pub mod templater;

pub use serializers::*;
pub use storage::*;
pub use templater::*;

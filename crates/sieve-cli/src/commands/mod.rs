pub mod batch;
pub mod canon;
pub mod dispatch;
pub mod shared;

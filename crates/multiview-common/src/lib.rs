pub mod errors;
pub mod types;

pub use errors::{
    CodecError, ConfigError, MultiviewError, PlayerError, ScheduleError, StorageError,
};
pub use types::{LayoutType, PipPosition, Platform, Rect, Stream, StreamRef, MAX_STREAMS};

pub type Result<T> = std::result::Result<T, MultiviewError>;

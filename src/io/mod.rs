// Purpose - external interfaces: where presence events come from

pub mod feed;

pub use feed::{open, EventFeed, FeedError};

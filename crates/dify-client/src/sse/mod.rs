//! Server-Sent Events wire parsing.
//!
//! Transport-free building blocks: [`LineDecoder`] turns raw body chunks
//! into lines, [`FrameAccumulator`] turns lines into event payloads.

mod frame;
mod line;

pub use frame::{FrameAccumulator, Frames, SseLine, frames};
pub use line::LineDecoder;

//! Document rendering
//!
//! - `ephemeral`: self-deleting scratch files
//! - `pipeline`: runs the external renderer with a deadline
//! - `pool`: caps how many renders run at once

pub mod ephemeral;
pub mod pipeline;
pub mod pool;

pub use ephemeral::EphemeralFile;
pub use pipeline::{RenderOutput, RenderPipeline};
pub use pool::{RenderPermit, RenderPool};

//! Controller layer: form events, conversion requests and event dispatch.

pub mod events;
pub mod orchestration;
pub mod session;

pub use events::{ConversionDirection, FormEvent, FormField};
pub use session::{SessionController, ShutdownHandle};

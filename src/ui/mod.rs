//! DOM event wiring.  Handlers translate browser events into `Message`s and
//! hand them to `dispatch_global_message`; they keep no state of their own.

pub mod events;

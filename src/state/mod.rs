//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chats`, `messages`, `session`, `rename`) so
//! individual components can depend on small focused models. Transitions are
//! plain methods on plain structs; components hold them in `RwSignal`s and
//! stay thin.

pub mod chats;
pub mod messages;
pub mod rename;
pub mod session;

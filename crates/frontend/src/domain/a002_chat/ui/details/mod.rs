//! Chat panel (MVVM)
//!
//! Structure:
//! - view_model.rs: ChatPanelVm with RwSignals
//! - view.rs: Main component ChatPanel
//! - message_bubble.rs: One exchange (question, answer, sources)

mod message_bubble;
mod view;
mod view_model;

pub use message_bubble::MessageBubble;
pub use view::ChatPanel;
pub use view_model::ChatPanelVm;

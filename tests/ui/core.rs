#[path = "core/actions.rs"]
mod actions;

#[path = "core/event_handler.rs"]
mod event_handler;

#[path = "core/pointer.rs"]
mod pointer;

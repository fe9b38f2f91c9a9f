//! Outbox - GUI library.
//!
//! A two-screen desktop mail-compose application built with Iced 0.14 using
//! the Elm architecture (State, Message, Update, View). The compose form
//! hands finished messages to the platform's default mail client through a
//! `mailto:` URL; Outbox itself never talks to a mail server.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

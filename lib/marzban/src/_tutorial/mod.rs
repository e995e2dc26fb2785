//! # Tutorial: Managing a panel with marzban
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Connect, log in, manage users
//! 2. [Errors][chapter_1] - Telling failures apart
//! 3. [Transports & Middleware][chapter_2] - Logging, compression, custom transports
//!
//! Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;

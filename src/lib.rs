//! # Adbook Architecture
//!
//! Adbook is a **UI-agnostic rendering library** for a personal contact and
//! notes manager, with a thin interactive binary on top. The library turns
//! in-memory records into plain UTF-8 text; it never touches stdout, files
//! or the network itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, drives the prompt loop, prints text    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Render Layer (render/)                                     │
//! │  - Pure formatters: record blocks, notes, command lists     │
//! │  - The contact pager: the one stateful piece (PageCursor)   │
//! │  - Returns Strings and result enums, never prints           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (model.rs)                                     │
//! │  - Record, Birthday, AddressBook, Note, NoteBook            │
//! │  - Ordered collections; birthday countdown math             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principles
//!
//! - **Rendering never errors.** "Note missing", "book empty" and "no more
//!   pages" are ordinary outcomes, modeled as enum variants
//!   ([`render::NoteLookup`], [`render::PageResult`]) that callers must
//!   match on. Internal consistency defects are logged via `tracing` and
//!   never surface as user text.
//! - **No hidden state.** Pagination state lives in an explicit
//!   [`render::PageCursor`] value owned by the caller and threaded through
//!   each call, not in the address book itself.
//! - **Two small contracts.** Every formatter implements
//!   [`render::Formatter`]; the pager implements [`render::Paginator`].
//!   No inheritance-style trait hierarchies.
//!
//! ## Module overview
//!
//! - [`model`]: core data types
//! - [`render`]: formatters and the contact pager
//! - [`error`]: error types for the binary's I/O edge

pub mod error;
pub mod model;
pub mod render;

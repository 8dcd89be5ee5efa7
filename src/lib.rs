//! uiforge — natural-language UI descriptions to constrained, previewable
//! component trees.
//!
//! ARCHITECTURE
//! ============
//! A generation request flows through four sequential pipeline stages
//! (plan → content → validate → assemble), with an explanation stage running
//! off the same plan. LLM output is treated as untrusted text throughout:
//! all leniency lives in one repair step, and a closed component vocabulary
//! is enforced by a lexical scanner rather than a full parser.
//!
//! The `preview` and `history` modules are the client-facing half: a
//! sandboxed evaluator that re-renders the assembled artifact against a
//! fixed component registry on every edit, and a linear undo/redo log.

pub mod api;
pub mod history;
pub mod llm;
pub mod pipeline;
pub mod preview;
pub mod routes;
pub mod security;
pub mod state;

//! Dashboard HTML generation and embedding.
//!
//! The Rolodex dashboard is a single self-contained HTML file with all CSS
//! and JavaScript inlined. It provides 4 tabbed views: Records, Chat,
//! Campaign, and Settings.
//!
//! The HTML is embedded at compile time via `include_str!` so the binary has
//! no external file dependencies at runtime.

/// The complete self-contained dashboard HTML.
///
/// A single HTML file with all CSS embedded in `<style>` tags and all
/// JavaScript embedded in `<script>` tags. It has zero external
/// dependencies -- no CDN links, no npm packages, no build step required.
///
/// The dashboard talks to the Rolodex API on the same origin and provides:
///
/// - **Records**: card grid with live search and per-field filters,
///   record detail modal, refresh control
/// - **Chat**: assistant conversation with answer/notice bubbles
/// - **Campaign**: editable subject/body, recipient list, personalization
///   preview, mail-client handoff link
/// - **Settings**: connection and assistant configuration editor
pub const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

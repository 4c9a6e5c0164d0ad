//! Shared UI icons and emojis.
//!
//! Emoji constants with plain-text fallbacks for terminals that cannot
//! render them.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR] ");
pub static UPDATE: Emoji<'_, '_> = Emoji("🔄 ", "[UPD] ");
pub static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "");

//! Built-in widgets: Badge, Card, Divider, Avatar, ProgressBar.

pub mod avatar;
pub mod badge;
pub mod card;
pub mod divider;
pub mod progress_bar;

pub use avatar::Avatar;
pub use badge::Badge;
pub use card::Card;
pub use divider::Divider;
pub use progress_bar::ProgressBar;

use crate::registry;

/// Register every built-in widget under its `ui-` tag name.
///
/// Idempotent: tags already defined keep their first registration.
pub fn register_builtins() {
    registry::define("ui-avatar", || Box::new(Avatar::new()));
    registry::define("ui-badge", || Box::new(Badge::new()));
    registry::define("ui-card", || Box::new(Card::new()));
    registry::define("ui-divider", || Box::new(Divider::new()));
    registry::define("ui-progress-bar", || Box::new(ProgressBar::new()));
}

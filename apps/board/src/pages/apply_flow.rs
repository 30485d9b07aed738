//! Apply panel on the detail page.
//!
//! `Hidden → FormVisible → Submitted → Hidden`. The success indicator stays up
//! for `SUCCESS_WINDOW`, after which the form and indicator hide and the Apply
//! trigger comes back.

use std::time::Duration;

use serde::Deserialize;
use tokio::time::Instant;

pub const SUCCESS_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyPanel {
    Hidden,
    FormVisible,
    Submitted { at: Instant },
}

impl ApplyPanel {
    /// Apply trigger clicked.
    pub fn open(self) -> Self {
        match self {
            ApplyPanel::Hidden => ApplyPanel::FormVisible,
            other => other,
        }
    }

    /// Form submitted and recorded.
    pub fn submit(self, now: Instant) -> Self {
        ApplyPanel::Submitted { at: now }
    }

    /// Advances the success timer.
    pub fn tick(self, now: Instant) -> Self {
        match self {
            ApplyPanel::Submitted { at } if now.duration_since(at) >= SUCCESS_WINDOW => {
                ApplyPanel::Hidden
            }
            other => other,
        }
    }

    /// Time left before the panel resets, while the success indicator shows.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self {
            ApplyPanel::Submitted { at } => {
                Some(SUCCESS_WINDOW.saturating_sub(now.duration_since(*at)))
            }
            _ => None,
        }
    }

    /// The reload that ends the success window: when it fires and which panel
    /// state the page lands in.
    pub fn scheduled_reset(&self, now: Instant) -> Option<PanelReset> {
        let after = self.remaining(now)?;
        Some(PanelReset {
            after,
            to: PanelParam::from(self.tick(now + after)),
        })
    }

    pub fn form_visible(&self) -> bool {
        !matches!(self, ApplyPanel::Hidden)
    }

    pub fn success_visible(&self) -> bool {
        matches!(self, ApplyPanel::Submitted { .. })
    }

    pub fn apply_trigger_visible(&self) -> bool {
        matches!(self, ApplyPanel::Hidden)
    }
}

/// Panel state as carried in the detail page URL (`?panel=form`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelParam {
    #[default]
    Hidden,
    Form,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelReset {
    pub after: Duration,
    pub to: PanelParam,
}

impl From<ApplyPanel> for PanelParam {
    fn from(panel: ApplyPanel) -> Self {
        match panel {
            ApplyPanel::Hidden => PanelParam::Hidden,
            ApplyPanel::FormVisible => PanelParam::Form,
            ApplyPanel::Submitted { .. } => PanelParam::Submitted,
        }
    }
}

impl PanelParam {
    /// Query string that reproduces this state on `/job-details`.
    pub fn query(&self) -> &'static str {
        match self {
            PanelParam::Hidden => "",
            PanelParam::Form => "?panel=form",
            PanelParam::Submitted => "?panel=submitted",
        }
    }

    /// Rebuilds the panel for a fresh page load. A submitted panel starts its
    /// success window at `now`.
    pub fn into_panel(self, now: Instant) -> ApplyPanel {
        match self {
            PanelParam::Hidden => ApplyPanel::Hidden,
            PanelParam::Form => ApplyPanel::Hidden.open(),
            PanelParam::Submitted => ApplyPanel::Hidden.open().submit(now),
        }
    }
}

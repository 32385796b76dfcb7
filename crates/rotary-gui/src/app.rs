//! Demo application: one row of knobs built from a panel file.

use std::path::Path;

use egui::{CentralPanel, Context, RichText};
use rotary_config::{ConfigError, Panel, resolve_panel_path};
use rotary_core::{Bounds, Knob, SubscriptionId};

use crate::capture::EguiCapture;
use crate::widgets::KnobWidget;

/// A knob plus what the panel shows around it.
struct PanelKnob {
    label: String,
    initial: f64,
    knob: Knob,
    /// Present when value changes are logged.
    log_subscription: Option<SubscriptionId>,
}

/// Main application state.
pub struct RotaryApp {
    title: String,
    knobs: Vec<PanelKnob>,
}

impl RotaryApp {
    /// Build the knobs of `panel`, with cursor capture bound to `cc`'s context.
    ///
    /// When `log_values` is set every user-driven change is logged at info level.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        panel: &Panel,
        log_values: bool,
    ) -> Result<Self, ConfigError> {
        Self::with_context(&cc.egui_ctx, panel, log_values)
    }

    /// Same as [`new`](Self::new) without an eframe creation context.
    pub fn with_context(
        ctx: &Context,
        panel: &Panel,
        log_values: bool,
    ) -> Result<Self, ConfigError> {
        let options = panel.knob_options()?;
        let mut knobs = Vec::with_capacity(options.len());

        for (index, (spec, opts)) in panel.knobs.iter().zip(options).enumerate() {
            let label = spec.display_label().to_string();
            let knob = Knob::new(opts)
                .map_err(|source| ConfigError::InvalidKnob {
                    index,
                    label: label.clone(),
                    source,
                })?
                .with_capture(Box::new(EguiCapture::new(ctx.clone())));

            let mut entry = PanelKnob {
                label,
                initial: opts.value,
                knob,
                log_subscription: None,
            };
            if log_values {
                let name = entry.label.clone();
                entry.log_subscription = Some(entry.knob.on_change(move |value| {
                    tracing::info!(knob = %name, value, "knob changed");
                }));
            }
            knobs.push(entry);
        }

        tracing::info!(title = %panel.title, knobs = knobs.len(), "panel ready");
        Ok(Self {
            title: panel.title.clone(),
            knobs,
        })
    }

    /// Current value of every knob, in panel order.
    pub fn values(&self) -> Vec<f64> {
        self.knobs.iter().map(|k| k.knob.value()).collect()
    }

    /// Stop or resume logging value changes.
    pub fn set_logging(&mut self, enabled: bool) {
        for entry in &mut self.knobs {
            match (enabled, entry.log_subscription) {
                (false, Some(id)) => {
                    entry.knob.unsubscribe(id);
                    entry.log_subscription = None;
                }
                (true, None) => {
                    let name = entry.label.clone();
                    entry.log_subscription = Some(entry.knob.on_change(move |value| {
                        tracing::info!(knob = %name, value, "knob changed");
                    }));
                }
                _ => {}
            }
        }
    }

    /// Whether value changes are being logged.
    pub fn is_logging(&self) -> bool {
        self.knobs.iter().any(|k| k.log_subscription.is_some())
    }

    /// Render one frame.
    pub fn show(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                for entry in &mut self.knobs {
                    ui.vertical(|ui| {
                        ui.add(KnobWidget::new(&mut entry.knob));
                        ui.label(RichText::new(&entry.label).strong());
                        let bounds = entry.knob.bounds();
                        let range = format!("{} to {}", bounds.min(), bounds.max());
                        ui.label(value_text(entry.knob.value(), bounds))
                            .on_hover_text(range);
                        // Programmatic reset; listeners are not notified
                        if ui.small_button("Reset").clicked() {
                            entry.knob.set(entry.initial);
                        }
                    });
                    ui.add_space(16.0);
                }
            });

            ui.add_space(12.0);
            let mut logging = self.is_logging();
            if ui.checkbox(&mut logging, "Log value changes").changed() {
                self.set_logging(logging);
            }
        });
    }
}

impl eframe::App for RotaryApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Format a value with precision suited to the knob's range.
fn value_text(value: f64, bounds: Bounds) -> String {
    let span = bounds.max() - bounds.min();
    let decimals = if span <= 2.0 {
        2
    } else if span <= 50.0 {
        1
    } else {
        0
    };
    format!("{value:.decimals$}")
}

/// Load the panel to show, falling back to [`Panel::demo`] on any problem.
///
/// `explicit` comes from the command line; without it the user's default
/// panel file is used when present.
pub fn load_panel(explicit: Option<&Path>) -> Panel {
    let Some(path) = resolve_panel_path(explicit) else {
        tracing::info!("no panel file, using demo panel");
        return Panel::demo();
    };

    match Panel::load(&path).and_then(|panel| panel.validate().map(|()| panel)) {
        Ok(panel) => {
            tracing::info!(path = %path.display(), knobs = panel.len(), "loaded panel");
            panel
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "failed to load panel, using demo panel"
            );
            Panel::demo()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotary_config::KnobSpec;

    #[test]
    fn builds_one_knob_per_spec() {
        let ctx = Context::default();
        let app = RotaryApp::with_context(&ctx, &Panel::demo(), false).unwrap();
        assert_eq!(app.values(), vec![50.0, 0.0, 0.75]);
        assert!(!app.is_logging());
    }

    #[test]
    fn logging_toggles_subscriptions() {
        let ctx = Context::default();
        let mut app = RotaryApp::with_context(&ctx, &Panel::demo(), true).unwrap();
        assert!(app.is_logging());
        app.set_logging(false);
        assert!(!app.is_logging());
        assert!(app.knobs.iter().all(|k| k.knob.listener_count() == 0));
        app.set_logging(true);
        assert!(app.knobs.iter().all(|k| k.knob.listener_count() == 1));
    }

    #[test]
    fn value_precision_follows_range() {
        let unit = Bounds::new(0.0, 1.0).unwrap();
        let gain = Bounds::new(-12.0, 12.0).unwrap();
        assert_eq!(value_text(0.75, unit), "0.75");
        assert_eq!(value_text(-6.31, gain), "-6.3");
        assert_eq!(value_text(66.666, Bounds::default()), "67");
    }

    #[test]
    fn invalid_panel_is_rejected() {
        let ctx = Context::default();
        let panel = Panel::new("Bad").with_knob(KnobSpec::new(32.0, "red"));
        assert!(RotaryApp::with_context(&ctx, &panel, false).is_err());
    }

    #[test]
    fn unreadable_panel_falls_back_to_demo() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.toml");
        std::fs::write(&path, "knobs = 3").unwrap();
        assert_eq!(load_panel(Some(&path)), Panel::demo());
    }

    #[test]
    fn explicit_panel_is_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("one.toml");
        let panel = Panel::new("One").with_knob(KnobSpec::new(40.0, "#00ff00"));
        panel.save(&path).unwrap();
        assert_eq!(load_panel(Some(&path)), panel);
    }
}

use serde_json::Value;

use crate::{foundation::error::WidgetResult, widget::component::WidgetPayload};

/// Host-side collaborator that mounts the browser widget.
///
/// Implementations hand the payload to whatever runtime hosts the widget and return the value
/// it last reported (`0`, `1`, or `{regions, ts}`).
pub trait WidgetBridge {
    /// Render or re-render the widget with `payload`.
    fn render(&self, payload: &WidgetPayload) -> WidgetResult<Value>;
}

impl<F> WidgetBridge for F
where
    F: Fn(&WidgetPayload) -> WidgetResult<Value>,
{
    fn render(&self, payload: &WidgetPayload) -> WidgetResult<Value> {
        self(payload)
    }
}

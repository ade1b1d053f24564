use super::{heading, DocPage, Stack};
use crate::ui::components::alert::{Alert, AlertVariant};
use crate::ui::core::{AppContext, Page};
use ratatui::Frame;

pub struct AlertsPage;

fn alerts(ctx: &AppContext) -> Vec<Alert> {
    let t = &ctx.t().alerts;
    let copy = [
        (t.default_title, t.default_desc),
        (t.destructive_title, t.destructive_desc),
        (t.success_title, t.success_desc),
        (t.info_title, t.info_desc),
        (t.warning_title, t.warning_desc),
    ];
    AlertVariant::ALL
        .into_iter()
        .zip(copy)
        .map(|(variant, (title, description))| Alert::new(variant, title, description))
        .collect()
}

impl DocPage for AlertsPage {
    fn page(&self) -> Page {
        Page::Alerts
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().alerts;
        heading(f, stack, t.title, t.subtitle);

        for alert in alerts(ctx) {
            if let Some(rect) = stack.next(alert.height(stack.width())) {
                alert.render(f, rect, &ctx.icons);
            }
            stack.gap(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_alert_per_variant() {
        let ctx = AppContext::default();
        let alerts = alerts(&ctx);
        assert_eq!(alerts.len(), AlertVariant::ALL.len());
        assert_eq!(alerts[1].variant, AlertVariant::Destructive);
        assert_eq!(alerts[1].title, ctx.t().alerts.destructive_title);
    }
}

use super::{heading, section, wrap_spans, DocPage, Stack};
use crate::ui::components::avatar::{avatar, avatar_group, AvatarSize};
use crate::ui::core::{AppContext, Page};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AvatarsPage;

/// One row per size with its scale label
fn size_rows(name: &str) -> Vec<Line<'static>> {
    AvatarSize::ALL
        .into_iter()
        .map(|size| {
            Line::from(vec![
                Span::styled(format!("{:>3}  ", size.label()), Style::default().fg(Color::DarkGray)),
                avatar(name, size),
            ])
        })
        .collect()
}

impl DocPage for AvatarsPage {
    fn page(&self) -> Page {
        Page::Avatars
    }

    fn render(&mut self, f: &mut Frame, stack: &mut Stack, ctx: &AppContext) {
        let t = &ctx.t().avatars;
        heading(f, stack, t.title, t.subtitle);

        section(f, stack, t.sizes, None);
        let name = t.people.first().copied().unwrap_or_default();
        let rows = size_rows(name);
        let height = rows.len() as u16;
        stack.paragraph(f, Paragraph::new(rows), height);

        section(f, stack, t.fallback, None);
        let spans = t.people.iter().map(|person| avatar(person, AvatarSize::S10)).collect();
        let lines = wrap_spans(spans, stack.width());
        let height = lines.len() as u16;
        stack.paragraph(f, Paragraph::new(lines), height);

        section(f, stack, t.group, None);
        let groups = vec![
            avatar_group(t.people, None, AvatarSize::S10),
            Line::default(),
            avatar_group(t.people, Some(2), AvatarSize::S8),
        ];
        stack.paragraph(f, Paragraph::new(groups), 3);
    }
}

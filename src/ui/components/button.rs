use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::utils::color::palette;
use crate::utils::text::width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Success,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 7] = [
        ButtonVariant::Default,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
        ButtonVariant::Success,
        ButtonVariant::Link,
    ];

    fn style(self) -> Style {
        match self {
            ButtonVariant::Default => Style::default().bg(palette("primary")).fg(Color::White),
            ButtonVariant::Secondary => Style::default().bg(palette("secondary")).fg(palette("foreground")),
            ButtonVariant::Outline => Style::default().fg(Color::White),
            ButtonVariant::Ghost => Style::default().fg(Color::Gray),
            ButtonVariant::Danger => Style::default().bg(palette("danger")).fg(Color::White),
            ButtonVariant::Success => Style::default().bg(palette("success")).fg(Color::White),
            ButtonVariant::Link => Style::default()
                .fg(palette("primary"))
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    fn has_fill(self) -> bool {
        matches!(
            self,
            ButtonVariant::Default | ButtonVariant::Secondary | ButtonVariant::Danger | ButtonVariant::Success
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Square button showing only its icon
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg, ButtonSize::Icon];

    /// Horizontal padding on each side, in cells
    fn padding(self) -> usize {
        match self {
            ButtonSize::Sm | ButtonSize::Icon => 1,
            ButtonSize::Md => 2,
            ButtonSize::Lg => 4,
        }
    }
}

/// A one-row push button
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Button {
    label: String,
    icon: Option<&'static str>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    focused: bool,
    ai_enhanced: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Loading buttons show a spinner and ignore activation
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Marks actions driven by automation with a glow
    #[must_use]
    pub fn ai_enhanced(mut self, ai_enhanced: bool) -> Self {
        self.ai_enhanced = ai_enhanced;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn content(&self, spinner: &str) -> String {
        let body = match (self.size, self.icon) {
            (ButtonSize::Icon, Some(icon)) => icon.to_string(),
            (_, Some(icon)) => format!("{} {}", icon, self.label),
            (_, None) => self.label.clone(),
        };
        if self.loading {
            format!("{spinner} {body}")
        } else {
            body
        }
    }

    /// Width in cells once rendered with a one-cell spinner frame
    pub fn width(&self) -> u16 {
        let content = width(&self.content("-"));
        content + 2 * self.size.padding() as u16 + u16::from(self.ai_enhanced)
    }

    pub fn style(&self) -> Style {
        let mut style = self.variant.style();
        if !self.is_interactive() {
            style = style.add_modifier(Modifier::DIM);
            if !self.variant.has_fill() {
                style = style.fg(Color::DarkGray);
            }
        }
        if self.focused {
            style = if self.variant.has_fill() {
                style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                style.add_modifier(Modifier::REVERSED)
            };
        }
        style
    }

    pub fn line(&self, spinner: &str) -> Line<'static> {
        let pad = " ".repeat(self.size.padding());
        let style = self.style();
        let mut spans = Vec::new();
        if self.ai_enhanced {
            spans.push(Span::styled("✦", Style::default().fg(palette("primary"))));
        }
        match self.variant {
            ButtonVariant::Outline => {
                spans.push(Span::styled("[", Style::default().fg(palette("border"))));
                spans.push(Span::styled(
                    format!("{}{}{}", &pad[1..], self.content(spinner), &pad[1..]),
                    style,
                ));
                spans.push(Span::styled("]", Style::default().fg(palette("border"))));
            }
            _ => spans.push(Span::styled(format!("{pad}{}{pad}", self.content(spinner)), style)),
        }
        Line::from(spans)
    }

    /// Draw into `area` and return the cells the button occupies
    pub fn render(&self, f: &mut Frame, area: Rect, spinner: &str) -> Rect {
        let used = Rect::new(area.x, area.y, self.width().min(area.width), area.height.min(1));
        f.render_widget(Paragraph::new(self.line(spinner)), used);
        used
    }
}

/// Lay buttons out left to right with a one-cell gap, wrapping to the next
/// row when the line is full. Returns one rect per button.
pub fn flow(buttons: &[Button], area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(buttons.len());
    let mut x = area.x;
    let mut y = area.y;
    for button in buttons {
        let w = button.width().min(area.width);
        if x > area.x && x + w > area.x + area.width {
            x = area.x;
            y += 2;
        }
        rects.push(Rect::new(x, y, w, 1));
        x += w + 1;
    }
    rects
}

/// Rows [`flow`] needs for `buttons` in `width` columns
pub fn flow_height(buttons: &[Button], width: u16) -> u16 {
    flow(buttons, Rect::new(0, 0, width, 1))
        .last()
        .map_or(0, |rect| rect.y + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_grows_with_size() {
        let sm = Button::new("Save").size(ButtonSize::Sm).width();
        let md = Button::new("Save").width();
        let lg = Button::new("Save").size(ButtonSize::Lg).width();
        assert!(sm < md && md < lg);
        assert_eq!(md, 8);
    }

    #[test]
    fn test_loading_is_not_interactive() {
        assert!(!Button::new("Save").loading(true).is_interactive());
        assert!(!Button::new("Save").disabled(true).is_interactive());
        assert!(Button::new("Save").is_interactive());
    }

    #[test]
    fn test_loading_prefixes_spinner() {
        let line = Button::new("Save").loading(true).line("*");
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text.trim(), "* Save");
    }

    #[test]
    fn test_icon_size_hides_label() {
        let line = Button::new("Settings").icon("⚙").size(ButtonSize::Icon).line("*");
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text.trim(), "⚙");
    }

    #[test]
    fn test_flow_wraps() {
        let buttons = vec![Button::new("One"), Button::new("Two"), Button::new("Three")];
        let rects = flow(&buttons, Rect::new(0, 0, 16, 10));
        assert_eq!(rects[0].y, 0);
        assert_eq!(rects[1].y, 0);
        assert_eq!(rects[2].y, 2);
        assert_eq!(flow_height(&buttons, 16), 3);
    }
}

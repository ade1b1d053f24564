use ratatui::layout::Rect;

use super::options::{filter_options, group_options, ComboOption, OptionRow};
use crate::constants::COMBOBOX_DEFAULT_WIDTH;
use crate::ui::core::{Action, AppContext, OutsideClickGuard};

/// Fixed configuration for a combobox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxConfig {
    /// Trigger text when nothing is selected
    pub placeholder: String,
    /// Shown in the empty search input
    pub search_placeholder: String,
    /// Single row shown when nothing matches the search
    pub empty_text: String,
    /// Trigger text while loading
    pub loading_text: String,
    pub disabled: bool,
    pub is_loading: bool,
    pub clearable: bool,
    pub label: Option<String>,
    /// Hint below the trigger; hidden while `error` is set
    pub helper_text: Option<String>,
    pub error: Option<String>,
    /// Trigger width in columns
    pub width: u16,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select option...".to_string(),
            search_placeholder: "Search...".to_string(),
            empty_text: "No results found.".to_string(),
            loading_text: "Loading...".to_string(),
            disabled: false,
            is_loading: false,
            clearable: false,
            label: None,
            helper_text: None,
            error: None,
            width: COMBOBOX_DEFAULT_WIDTH,
        }
    }
}

/// Turns a requested value into the action the owner wants dispatched
pub type ChangeHandler = Box<dyn Fn(Option<String>) -> Action>;

/// Who owns the selected value
pub enum Selection {
    /// The combobox keeps the value itself
    Owned(Option<String>),
    /// The caller keeps the value; the combobox only requests changes
    External {
        value: Option<String>,
        on_change: ChangeHandler,
    },
}

impl Selection {
    pub fn owned() -> Self {
        Selection::Owned(None)
    }

    pub fn external(value: Option<String>, on_change: impl Fn(Option<String>) -> Action + 'static) -> Self {
        Selection::External {
            value,
            on_change: Box::new(on_change),
        }
    }

    fn value(&self) -> Option<&str> {
        match self {
            Selection::Owned(value) | Selection::External { value, .. } => value.as_deref(),
        }
    }

    /// Apply a new value: stored when owned, forwarded when external
    fn request(&mut self, next: Option<String>) -> Action {
        match self {
            Selection::Owned(value) => {
                *value = next;
                Action::None
            }
            Selection::External { on_change, .. } => on_change(next),
        }
    }
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Selection::External { value, .. } => f.debug_struct("External").field("value", value).finish(),
        }
    }
}

/// What the trigger shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerContent<'a> {
    Loading,
    Selected(&'a ComboOption),
    Placeholder,
}

/// Screen areas recorded during the last render, used for hit testing
#[derive(Debug, Default, Clone)]
pub(super) struct HitAreas {
    pub(super) widget: Option<Rect>,
    pub(super) trigger: Option<Rect>,
    pub(super) clear: Option<Rect>,
    pub(super) popup: Option<Rect>,
    /// Visible option rows with the value each one selects
    pub(super) rows: Vec<(Rect, String)>,
}

/// Searchable single-select list.
///
/// The list is closed initially. While it is open the combobox holds an
/// [`OutsideClickGuard`], so a press anywhere outside its rendered bounds
/// closes it again.
pub struct Combobox {
    pub(super) options: Vec<ComboOption>,
    pub(super) config: ComboboxConfig,
    pub(super) selection: Selection,
    pub(super) open: bool,
    pub(super) search: String,
    /// Index into the selectable (non-header) rows
    pub(super) highlighted: usize,
    pub(super) scroll: usize,
    pub(super) focused: bool,
    pub(super) ctx: AppContext,
    pub(super) outside_click: Option<OutsideClickGuard>,
    pub(super) hits: HitAreas,
}

impl Combobox {
    pub fn new(options: Vec<ComboOption>, config: ComboboxConfig, selection: Selection, ctx: &AppContext) -> Self {
        Self {
            options,
            config,
            selection,
            open: false,
            search: String::new(),
            highlighted: 0,
            scroll: 0,
            focused: false,
            ctx: ctx.clone(),
            outside_click: None,
            hits: HitAreas::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.selection, Selection::External { .. })
    }

    /// Raw selected value, which may not match any option
    pub fn value(&self) -> Option<&str> {
        self.selection.value()
    }

    /// The option the current value resolves to
    pub fn selected_option(&self) -> Option<&ComboOption> {
        let value = self.value()?;
        self.options.iter().find(|option| option.value == value)
    }

    fn is_interactive(&self) -> bool {
        !self.config.disabled && !self.config.is_loading
    }

    pub fn toggle_open(&mut self) {
        if !self.is_interactive() {
            return;
        }
        if self.open {
            self.close_list();
        } else {
            self.open_list();
        }
    }

    fn open_list(&mut self) {
        self.open = true;
        self.highlighted = 0;
        self.scroll = 0;
        self.outside_click = Some(self.ctx.pointer.subscribe());
    }

    fn close_list(&mut self) {
        self.open = false;
        self.search.clear();
        self.highlighted = 0;
        self.scroll = 0;
        self.hits.popup = None;
        self.hits.rows.clear();
        // Dropping the guard releases the outside-click listener
        self.outside_click = None;
    }

    pub fn update_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.highlighted = 0;
        self.scroll = 0;
    }

    /// Commit `value`. Choosing the current value again clears the selection.
    /// Always closes the list.
    pub fn select_option(&mut self, value: &str) -> Action {
        let next = if self.value() == Some(value) {
            None
        } else {
            Some(value.to_string())
        };
        self.close_list();
        self.selection.request(next)
    }

    /// Empty the selection without touching the open state
    pub fn clear_selection(&mut self) -> Action {
        self.selection.request(None)
    }

    /// Close after an interaction outside the widget. Selection and search
    /// are left alone apart from the reset every close performs.
    pub fn dismiss(&mut self) {
        if self.open {
            self.close_list();
        }
    }

    /// Consume a pending outside-click notification, closing the list if one
    /// arrived. Returns whether the list was dismissed.
    pub fn poll_outside_click(&mut self) -> bool {
        let triggered = self
            .outside_click
            .as_ref()
            .is_some_and(OutsideClickGuard::take_triggered);
        if triggered {
            self.dismiss();
        }
        triggered
    }

    /// Feed the caller-owned value back in. Owned selections are overwritten too.
    pub fn set_value(&mut self, value: Option<String>) {
        match &mut self.selection {
            Selection::Owned(current) | Selection::External { value: current, .. } => *current = value,
        }
    }

    /// Replace the option list, for instance after a language switch
    pub fn set_options(&mut self, options: Vec<ComboOption>) {
        self.options = options;
        self.highlighted = 0;
        self.scroll = 0;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.config.error = error;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.is_loading = loading;
        if loading {
            self.dismiss();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.dismiss();
        }
    }

    /// Swap the translated texts while keeping state flags
    pub fn set_texts(&mut self, placeholder: &str, search_placeholder: &str, empty_text: &str, loading_text: &str) {
        self.config.placeholder = placeholder.to_string();
        self.config.search_placeholder = search_placeholder.to_string();
        self.config.empty_text = empty_text.to_string();
        self.config.loading_text = loading_text.to_string();
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.config.label = label;
    }

    pub fn set_helper_text(&mut self, helper_text: Option<String>) {
        self.config.helper_text = helper_text;
    }

    pub fn trigger_content(&self) -> TriggerContent<'_> {
        if self.config.is_loading {
            return TriggerContent::Loading;
        }
        match self.selected_option() {
            Some(option) => TriggerContent::Selected(option),
            None => TriggerContent::Placeholder,
        }
    }

    /// Whether the clear affordance is shown
    pub fn shows_clear(&self) -> bool {
        self.config.clearable && self.is_interactive() && self.selected_option().is_some()
    }

    /// Text under the trigger and whether it is an error
    pub fn footer_text(&self) -> Option<(&str, bool)> {
        match (&self.config.error, &self.config.helper_text) {
            (Some(error), _) => Some((error.as_str(), true)),
            (None, Some(helper)) => Some((helper.as_str(), false)),
            (None, None) => None,
        }
    }

    /// Options matching the current search
    pub fn filtered(&self) -> Vec<&ComboOption> {
        filter_options(&self.options, &self.search)
    }

    /// Popup rows for the current search
    pub fn rows(&self) -> Vec<OptionRow<'_>> {
        group_options(&self.filtered())
    }

    /// The option the keyboard highlight is on, in display order
    pub fn highlighted_option(&self) -> Option<&ComboOption> {
        self.rows()
            .into_iter()
            .filter_map(|row| row.option())
            .nth(self.highlighted)
    }

    pub fn move_highlight(&mut self, delta: isize) {
        let count = self.rows().iter().filter(|row| row.option().is_some()).count();
        if count == 0 {
            self.highlighted = 0;
            return;
        }
        let next = self.highlighted as isize + delta;
        self.highlighted = next.rem_euclid(count as isize) as usize;
    }

    /// Refresh language, icons and tick from the app
    pub fn set_context(&mut self, ctx: &AppContext) {
        self.ctx = ctx.clone();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Forget the recorded screen areas when the widget is scrolled out of view
    pub fn hide(&mut self) {
        self.dismiss();
        self.hits = HitAreas::default();
    }

    /// Whether a screen position is on the trigger or the open popup
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = ratatui::layout::Position::new(column, row);
        [self.hits.widget, self.hits.popup]
            .into_iter()
            .flatten()
            .any(|rect| rect.contains(position))
    }
}

impl std::fmt::Debug for Combobox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("options", &self.options.len())
            .field("selection", &self.selection)
            .field("open", &self.open)
            .field("search", &self.search)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::PointerWatch;

    fn options() -> Vec<ComboOption> {
        vec![
            ComboOption::new("a", "Alpha").with_group("G1"),
            ComboOption::new("b", "Beta"),
            ComboOption::new("c", "Gamma"),
        ]
    }

    fn owned(config: ComboboxConfig) -> Combobox {
        Combobox::new(options(), config, Selection::owned(), &AppContext::default())
    }

    #[test]
    fn test_starts_closed_with_empty_search() {
        let combo = owned(ComboboxConfig::default());
        assert!(!combo.is_open());
        assert_eq!(combo.search(), "");
        assert_eq!(combo.trigger_content(), TriggerContent::Placeholder);
    }

    #[test]
    fn test_update_search_keeps_open_state_and_selection() {
        let mut combo = owned(ComboboxConfig::default());
        combo.toggle_open();
        combo.select_option("b");
        combo.toggle_open();
        combo.update_search("gam");

        assert!(combo.is_open());
        assert_eq!(combo.value(), Some("b"));
        assert_eq!(combo.filtered().len(), 1);
    }

    #[test]
    fn test_reselect_clears() {
        let mut combo = owned(ComboboxConfig::default());
        combo.select_option("a");
        assert_eq!(combo.value(), Some("a"));
        combo.select_option("a");
        assert_eq!(combo.value(), None);
    }

    #[test]
    fn test_select_closes_and_resets_search() {
        let mut combo = owned(ComboboxConfig::default());
        combo.toggle_open();
        combo.update_search("be");
        combo.select_option("b");

        assert!(!combo.is_open());
        assert_eq!(combo.search(), "");
    }

    #[test]
    fn test_closing_resets_search() {
        let mut combo = owned(ComboboxConfig::default());
        combo.toggle_open();
        combo.update_search("zz");
        combo.toggle_open();
        assert_eq!(combo.search(), "");
    }

    #[test]
    fn test_unknown_value_shows_placeholder() {
        let mut combo = owned(ComboboxConfig {
            clearable: true,
            ..ComboboxConfig::default()
        });
        combo.set_value(Some("missing".to_string()));

        assert_eq!(combo.trigger_content(), TriggerContent::Placeholder);
        assert!(!combo.shows_clear());
    }

    #[test]
    fn test_error_replaces_helper_text() {
        let mut combo = owned(ComboboxConfig {
            helper_text: Some("pick one".to_string()),
            ..ComboboxConfig::default()
        });
        assert_eq!(combo.footer_text(), Some(("pick one", false)));

        combo.set_error(Some("required".to_string()));
        assert_eq!(combo.footer_text(), Some(("required", true)));
    }

    #[test]
    fn test_highlight_skips_headers_and_wraps() {
        let mut combo = owned(ComboboxConfig::default());
        combo.toggle_open();
        // Rows: Beta, Gamma, [G1], Alpha
        assert_eq!(combo.highlighted_option().map(|o| o.value.as_str()), Some("b"));
        combo.move_highlight(2);
        assert_eq!(combo.highlighted_option().map(|o| o.value.as_str()), Some("a"));
        combo.move_highlight(1);
        assert_eq!(combo.highlighted_option().map(|o| o.value.as_str()), Some("b"));
        combo.move_highlight(-1);
        assert_eq!(combo.highlighted_option().map(|o| o.value.as_str()), Some("a"));
    }

    #[test]
    fn test_open_list_holds_one_listener() {
        let ctx = AppContext::default();
        let pointer: PointerWatch = ctx.pointer.clone();
        let mut combo = Combobox::new(options(), ComboboxConfig::default(), Selection::owned(), &ctx);

        combo.toggle_open();
        assert_eq!(pointer.listener_count(), 1);
        combo.toggle_open();
        assert_eq!(pointer.listener_count(), 0);

        combo.toggle_open();
        drop(combo);
        assert_eq!(pointer.listener_count(), 0);
    }

    #[test]
    fn test_disabling_closes_the_list() {
        let mut combo = owned(ComboboxConfig::default());
        combo.toggle_open();
        combo.set_disabled(true);
        assert!(!combo.is_open());
    }
}

use crate::_private::NonExhaustive;
use ratatui::style::Style;
use ratatui::widgets::Block;

/// Composite style for the calendar.
///
/// Every field except `style` is an override. Day cells are
/// styled by patching, in this order: `day`, `day_text`,
/// `today`, `today_text`, `select`, `select_text` and `focus`
/// for the selected day when the calendar is focused.
/// `non_current` goes last on the label of padding days, so they
/// stay dimmed even when selected. Disabled future days only get
/// `day`, `day_text` and `non_current`.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DualCalendarStyle {
    /// Base style for the whole calendar.
    pub style: Style,
    /// Header row.
    pub header: Option<Style>,
    /// Month title and navigation arrows.
    pub header_text: Option<Style>,
    /// Weekday names and day cells.
    pub grid: Option<Style>,
    /// Weekday names.
    pub day_name: Option<Style>,
    /// Day cell.
    pub day: Option<Style>,
    /// Day label.
    pub day_text: Option<Style>,
    /// Today's cell.
    pub today: Option<Style>,
    /// Today's label.
    pub today_text: Option<Style>,
    /// Selected cell.
    pub select: Option<Style>,
    /// Selected label.
    pub select_text: Option<Style>,
    /// Label of days outside the displayed month, or days that
    /// can't be selected.
    pub non_current: Option<Style>,
    /// Selected day when focused.
    pub focus: Option<Style>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub block: Option<Block<'static>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub non_exhaustive: NonExhaustive,
}

impl Default for DualCalendarStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            header: None,
            header_text: None,
            grid: None,
            day_name: None,
            day: None,
            day_text: None,
            today: None,
            today_text: None,
            select: None,
            select_text: None,
            non_current: None,
            focus: None,
            block: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

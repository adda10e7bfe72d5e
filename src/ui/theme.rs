use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub label: Color, // Address-like labels in registers and frames
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub frame_active: Color,
    pub frame_inactive: Color, // Returned-from frames still on the stack
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    label: Color::Rgb(249, 226, 175),          // Yellow for address labels
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    frame_active: Color::Rgb(137, 180, 250),   // Blue like the stacked boxes of a textbook diagram
    frame_inactive: Color::Rgb(108, 112, 134), // Greyed out once returned
};

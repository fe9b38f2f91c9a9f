//! Theme: colors, spacing, and widget styles.
//!
//! One light theme. Style functions follow the Iced 0.14 convention of
//! `fn(&Theme, Status) -> Style` so they can be passed to `.style()`
//! directly.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;

/// Page background.
pub const BACKGROUND: Color = Color {
    r: 0.98,
    g: 0.98,
    b: 0.99,
    a: 1.0,
};

/// Elevated surfaces: inputs, attachment chips, the title bar.
pub const SURFACE: Color = Color {
    r: 0.94,
    g: 0.95,
    b: 0.96,
    a: 1.0,
};

pub const BORDER_DEFAULT: Color = Color {
    r: 0.82,
    g: 0.84,
    b: 0.86,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.12,
    g: 0.14,
    b: 0.16,
    a: 1.0,
};

pub const TEXT_MUTED: Color = Color {
    r: 0.42,
    g: 0.45,
    b: 0.48,
    a: 1.0,
};

pub const TEXT_DISABLED: Color = Color {
    r: 0.65,
    g: 0.67,
    b: 0.70,
    a: 1.0,
};

/// Accent for primary actions.
pub const ACCENT: Color = Color {
    r: 0.13,
    g: 0.42,
    b: 0.82,
    a: 1.0,
};

pub const ACCENT_HOVER: Color = Color {
    r: 0.10,
    g: 0.35,
    b: 0.70,
    a: 1.0,
};

pub const STATUS_ERROR: Color = Color {
    r: 0.78,
    g: 0.16,
    b: 0.16,
    a: 1.0,
};

pub const STATUS_SUCCESS: Color = Color {
    r: 0.13,
    g: 0.55,
    b: 0.28,
    a: 1.0,
};

pub const STATUS_WARNING: Color = Color {
    r: 0.80,
    g: 0.55,
    b: 0.10,
    a: 1.0,
};

pub const STATUS_INFO: Color = ACCENT;

pub const SHADOW: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.12,
};

// =============================================================================
// THEME
// =============================================================================

/// The application theme.
pub fn mail_theme() -> Theme {
    Theme::Light
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the send action.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(ACCENT.into()),
        text_color: WHITE,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(ACCENT_HOVER.into()),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(SURFACE.into()),
            text_color: TEXT_DISABLED,
            shadow: Shadow::default(),
            ..base
        },
    }
}

/// Secondary button style - neutral actions (back, attach).
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(SURFACE.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: BORDER_DEFAULT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(BACKGROUND.into()),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            ..base
        },
    }
}

/// Ghost button style - low-emphasis actions (remove attachment, dismiss
/// toast).
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: TEXT_MUTED,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(SURFACE.into()),
            text_color: TEXT_PRIMARY,
            ..base
        },
    }
}

// =============================================================================
// INPUT AND CONTAINER STYLES
// =============================================================================

/// Default text input style; `has_error` switches the border to the error
/// color.
pub fn text_input_style(has_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme, status| {
        let border_color = if has_error {
            STATUS_ERROR
        } else if matches!(status, text_input::Status::Focused { .. }) {
            ACCENT
        } else {
            BORDER_DEFAULT
        };

        text_input::Style {
            background: WHITE.into(),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: border_color,
            },
            icon: TEXT_MUTED,
            placeholder: TEXT_DISABLED,
            value: TEXT_PRIMARY,
            selection: Color { a: 0.25, ..ACCENT },
        }
    }
}

/// Title bar container style.
pub fn title_bar_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: BORDER_DEFAULT,
        },
        ..Default::default()
    }
}

/// Attachment chip container style.
pub fn attachment_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
            color: BORDER_DEFAULT,
        },
        ..Default::default()
    }
}

/// Toast container style.
pub fn toast_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            color: BORDER_DEFAULT,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

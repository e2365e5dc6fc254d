//! Storefront theme: colors, spacing and shared inline styles.

/// Light/dark palette selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#7C3AED";
    pub const LIGHT_SURFACE: &'static str = "#F8F7FC";
    pub const LIGHT_CARD: &'static str = "rgba(255,255,255,0.95)";
    pub const LIGHT_ON_SURFACE: &'static str = "#1E1B2E";
    pub const LIGHT_SUCCESS: &'static str = "#059669";
    pub const LIGHT_ERROR: &'static str = "#DC2626";
    pub const LIGHT_ACCENT: &'static str = "#EA580C";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#C4B5FD";
    pub const DARK_SURFACE: &'static str = "#13111C";
    pub const DARK_CARD: &'static str = "rgba(39,35,54,0.92)";
    pub const DARK_ON_SURFACE: &'static str = "#EDEBF5";
    pub const DARK_SUCCESS: &'static str = "#34D399";
    pub const DARK_ERROR: &'static str = "#F87171";
    pub const DARK_ACCENT: &'static str = "#FB923C";

    pub const OUTLINE: &'static str = "#8B86A3";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn card(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_CARD
        } else {
            Self::LIGHT_CARD
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn on_primary(is_dark: bool) -> &'static str {
        if is_dark {
            "#2E1065"
        } else {
            "#FFFFFF"
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
    pub fn accent(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ACCENT
        } else {
            Self::LIGHT_ACCENT
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
    pub const SCREEN_PADDING: &'static str = "24px";
}

/// Text input style used by every form.
pub fn input_style(is_dark: bool) -> String {
    format!(
        "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        AppColors::OUTLINE,
        AppColors::on_surface(is_dark)
    )
}

pub fn primary_button_style(is_dark: bool) -> String {
    format!(
        "padding: 12px 24px; border-radius: 8px; background: {}; color: {}; font-weight: 600; border: none; cursor: pointer;",
        AppColors::primary(is_dark),
        AppColors::on_primary(is_dark)
    )
}

pub fn outline_button_style(is_dark: bool) -> String {
    format!(
        "padding: 8px 16px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; cursor: pointer;",
        AppColors::OUTLINE,
        AppColors::on_surface(is_dark)
    )
}

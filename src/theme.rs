use gpui::*;

#[cfg(target_os = "macos")]
use objc2::rc::Retained;
#[cfg(target_os = "macos")]
use objc2_app_kit::NSColor;

pub struct Theme {
    pub text: Rgba,
    pub subtext1: Rgba,
    pub subtext0: Rgba,
    pub overlay1: Rgba,
    pub overlay0: Rgba,
    pub surface1: Rgba,
    pub surface0: Rgba,
    pub base: Rgba,
    pub mantle: Rgba,
    pub crust: Rgba,
    /// Dims the window behind a dialog
    pub backdrop: Rgba,
    pub accent: Rgba,
    pub warning: Rgba,
}

impl Global for Theme {}

/// System accent color on macOS, converted to sRGB
#[cfg(target_os = "macos")]
fn get_system_accent_color() -> Rgba {
    let accent_color: Retained<NSColor> = NSColor::controlAccentColor();
    if let Some(rgb_color) = accent_color.colorUsingColorSpace(objc2_app_kit::NSColorSpace::sRGBColorSpace().as_ref()) {
        let r = rgb_color.redComponent() as f32;
        let g = rgb_color.greenComponent() as f32;
        let b = rgb_color.blueComponent() as f32;
        let a = rgb_color.alphaComponent() as f32;
        return rgba(
            ((r * 255.0) as u32) << 24
                | ((g * 255.0) as u32) << 16
                | ((b * 255.0) as u32) << 8
                | (a * 255.0) as u32,
        );
    }
    rgb(0x89b4fa)
}

#[cfg(not(target_os = "macos"))]
fn get_system_accent_color() -> Rgba {
    rgb(0x89b4fa)
}

impl Theme {
    pub fn init(app: &mut App) {
        app.set_global(Theme::dark());
    }

    // Catppuccin Mocha
    pub fn dark() -> Theme {
        Theme {
            text: rgb(0xcdd6f4),
            subtext1: rgb(0xbac2de),
            subtext0: rgb(0xa6adc8),
            overlay1: rgb(0x7f849c),
            overlay0: rgb(0x6c7086),
            surface1: rgb(0x45475a),
            surface0: rgb(0x313244),
            base: rgb(0x1e1e2e),
            mantle: rgb(0x181825),
            crust: rgb(0x11111b),
            backdrop: rgba(0x00000080),
            accent: get_system_accent_color(),
            warning: rgb(0xf9e2af),
        }
    }
}
